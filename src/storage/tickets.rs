//! Ticket store: row ownership and mutation
//!
//! All reads denormalize creator and assignee display names via a join to
//! the user directory; a missing assignee yields a `None` name, never an
//! error.

use crate::core::{Priority, Status, Ticket, TicketId, TicketNumber, UserId};
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

/// Persistence operations for ticket rows
pub struct TicketStore;

impl TicketStore {
    /// Insert a new ticket with status `Open`
    ///
    /// Subject and description are validated here as well as in the
    /// caller layer; an empty or blank value is rejected outright.
    pub async fn insert(
        conn: &mut SqliteConnection,
        number: &TicketNumber,
        subject: &str,
        description: &str,
        priority: Priority,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> Result<TicketId> {
        if subject.trim().is_empty() {
            return Err(TicketDeskError::Validation(
                "Subject is required".to_string(),
            ));
        }
        if description.trim().is_empty() {
            return Err(TicketDeskError::Validation(
                "Description is required".to_string(),
            ));
        }

        let result = sqlx::query(
            "INSERT INTO tickets (ticket_number, subject, description, priority, status,
             created_by, created_at, last_modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(number)
        .bind(subject)
        .bind(description)
        .bind(priority)
        .bind(Status::Open)
        .bind(created_by)
        .bind(now)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        let id = TicketId(result.last_insert_rowid());
        debug!(%id, %number, "inserted ticket");
        Ok(id)
    }

    /// Load a single ticket, `None` if it does not exist
    pub async fn fetch(conn: &mut SqliteConnection, id: TicketId) -> Result<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT t.ticket_id, t.ticket_number, t.subject, t.description, t.priority,
                    t.status, t.created_by, t.assigned_to, t.created_at, t.last_modified_at,
                    u1.full_name AS created_by_name, u2.full_name AS assigned_to_name
             FROM tickets t
             LEFT JOIN users u1 ON t.created_by = u1.user_id
             LEFT JOIN users u2 ON t.assigned_to = u2.user_id
             WHERE t.ticket_id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(ticket)
    }

    /// Load a single ticket, failing with `TicketNotFound` if missing
    pub async fn fetch_required(conn: &mut SqliteConnection, id: TicketId) -> Result<Ticket> {
        Self::fetch(conn, id)
            .await?
            .ok_or(TicketDeskError::TicketNotFound { id })
    }

    /// Tickets created by the given user, newest creation first
    pub async fn list_by_creator(
        conn: &mut SqliteConnection,
        created_by: UserId,
    ) -> Result<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT t.ticket_id, t.ticket_number, t.subject, t.description, t.priority,
                    t.status, t.created_by, t.assigned_to, t.created_at, t.last_modified_at,
                    u1.full_name AS created_by_name, u2.full_name AS assigned_to_name
             FROM tickets t
             LEFT JOIN users u1 ON t.created_by = u1.user_id
             LEFT JOIN users u2 ON t.assigned_to = u2.user_id
             WHERE t.created_by = ?
             ORDER BY t.created_at DESC, t.ticket_id DESC",
        )
        .bind(created_by)
        .fetch_all(&mut *conn)
        .await?;

        Ok(tickets)
    }

    /// All tickets, newest creation first
    ///
    /// Intended for privileged callers; privilege enforcement is the
    /// caller layer's job.
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Ticket>> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT t.ticket_id, t.ticket_number, t.subject, t.description, t.priority,
                    t.status, t.created_by, t.assigned_to, t.created_at, t.last_modified_at,
                    u1.full_name AS created_by_name, u2.full_name AS assigned_to_name
             FROM tickets t
             LEFT JOIN users u1 ON t.created_by = u1.user_id
             LEFT JOIN users u2 ON t.assigned_to = u2.user_id
             ORDER BY t.created_at DESC, t.ticket_id DESC",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(tickets)
    }

    /// Apply an update to assignment and status
    ///
    /// Writes the assignee column as given (`None` clears it) and the
    /// status as resolved by the coordinator; bumps the modification
    /// timestamp. Subject, description, priority and creator are never
    /// touched by updates.
    pub async fn apply_update(
        conn: &mut SqliteConnection,
        id: TicketId,
        assigned_to: Option<UserId>,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE tickets
             SET assigned_to = ?, status = ?, last_modified_at = ?
             WHERE ticket_id = ?",
        )
        .bind(assigned_to)
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        debug!(%id, %status, "applied ticket update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_insert_rejects_blank_subject() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let result = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "   ",
            "description",
            Priority::Medium,
            fixture.reporter,
            Utc::now(),
        )
        .await;

        assert!(matches!(result, Err(TicketDeskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_description() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let result = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "subject",
            "",
            Priority::Medium,
            fixture.reporter,
            Utc::now(),
        )
        .await;

        assert!(matches!(result, Err(TicketDeskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_fetch_resolves_display_names() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let id = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "Printer broken",
            "No output",
            Priority::High,
            fixture.reporter,
            Utc::now(),
        )
        .await
        .expect("Failed to insert");

        let ticket = TicketStore::fetch_required(&mut conn, id)
            .await
            .expect("Failed to fetch");
        assert_eq!(ticket.created_by_name.as_deref(), Some("Bob Reporter"));
        assert_eq!(ticket.assigned_to_name, None);
        assert_eq!(ticket.status, Status::Open);
    }

    #[tokio::test]
    async fn test_fetch_required_maps_missing_to_not_found() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let result = TicketStore::fetch_required(&mut conn, TicketId(404)).await;
        assert!(matches!(
            result,
            Err(TicketDeskError::TicketNotFound { id: TicketId(404) })
        ));
    }

    #[tokio::test]
    async fn test_listing_orders_newest_first() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let base = Utc::now();
        for (i, subject) in ["first", "second", "third"].iter().enumerate() {
            TicketStore::insert(
                &mut conn,
                &TicketNumber::from_suffix(i as i64 + 1),
                subject,
                "d",
                Priority::Medium,
                fixture.reporter,
                base + chrono::Duration::seconds(i as i64),
            )
            .await
            .expect("Failed to insert");
        }

        let all = TicketStore::list_all(&mut conn)
            .await
            .expect("Failed to list");
        let subjects: Vec<_> = all.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, ["third", "second", "first"]);

        let mine = TicketStore::list_by_creator(&mut conn, fixture.reporter)
            .await
            .expect("Failed to list");
        assert_eq!(mine.len(), 3);

        let none = TicketStore::list_by_creator(&mut conn, fixture.admin)
            .await
            .expect("Failed to list");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_apply_update_clears_assignee_and_keeps_fields() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let id = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "subject",
            "description",
            Priority::High,
            fixture.reporter,
            Utc::now(),
        )
        .await
        .expect("Failed to insert");

        TicketStore::apply_update(
            &mut conn,
            id,
            Some(fixture.admin),
            Status::InProgress,
            Utc::now(),
        )
        .await
        .expect("Failed to update");

        let ticket = TicketStore::fetch_required(&mut conn, id)
            .await
            .expect("Failed to fetch");
        assert_eq!(ticket.assigned_to, Some(fixture.admin));
        assert_eq!(ticket.assigned_to_name.as_deref(), Some("Alice Admin"));
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.subject, "subject");

        TicketStore::apply_update(&mut conn, id, None, Status::InProgress, Utc::now())
            .await
            .expect("Failed to update");
        let ticket = TicketStore::fetch_required(&mut conn, id)
            .await
            .expect("Failed to fetch");
        assert_eq!(ticket.assigned_to, None);
        assert_eq!(ticket.assigned_to_name, None);
    }
}
