//! Append-only history ledger
//!
//! Pure inserts, never updated or deleted. The coordinator decides when a
//! transition warrants an entry; the store just records it.

use crate::core::{Status, StatusHistoryEntry, TicketId, UserId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

/// Persistence operations for the status history ledger
pub struct HistoryStore;

impl HistoryStore {
    /// Append one transition record
    ///
    /// `old_status` is `None` only for the initial "created" entry.
    pub async fn append(
        conn: &mut SqliteConnection,
        ticket_id: TicketId,
        old_status: Option<Status>,
        new_status: Status,
        changed_by: UserId,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        // A blank comment is stored as NULL, not as an empty string
        let comment = comment.filter(|c| !c.trim().is_empty());

        sqlx::query(
            "INSERT INTO ticket_status_history
             (ticket_id, old_status, new_status, changed_by, changed_at, comment)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(ticket_id)
        .bind(old_status)
        .bind(new_status)
        .bind(changed_by)
        .bind(now)
        .bind(comment)
        .execute(&mut *conn)
        .await?;

        debug!(%ticket_id, ?old_status, %new_status, "appended history entry");
        Ok(())
    }

    /// History for a ticket, newest first, with actor names resolved
    ///
    /// Timestamp ties are broken by insertion order.
    pub async fn list_for_ticket(
        conn: &mut SqliteConnection,
        ticket_id: TicketId,
    ) -> Result<Vec<StatusHistoryEntry>> {
        let entries = sqlx::query_as::<_, StatusHistoryEntry>(
            "SELECT h.history_id, h.ticket_id, h.old_status, h.new_status, h.changed_by,
                    h.changed_at, h.comment, u.full_name AS changed_by_name
             FROM ticket_status_history h
             LEFT JOIN users u ON h.changed_by = u.user_id
             WHERE h.ticket_id = ?
             ORDER BY h.changed_at DESC, h.history_id DESC",
        )
        .bind(ticket_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, TicketNumber};
    use crate::storage::TicketStore;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_append_and_list_newest_first() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let now = Utc::now();
        let id = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "s",
            "d",
            Priority::Medium,
            fixture.reporter,
            now,
        )
        .await
        .expect("Failed to insert ticket");

        HistoryStore::append(
            &mut conn,
            id,
            None,
            Status::Open,
            fixture.reporter,
            Some("Ticket created"),
            now,
        )
        .await
        .expect("Failed to append");
        HistoryStore::append(
            &mut conn,
            id,
            Some(Status::Open),
            Status::InProgress,
            fixture.admin,
            None,
            now + chrono::Duration::seconds(1),
        )
        .await
        .expect("Failed to append");

        let entries = HistoryStore::list_for_ticket(&mut conn, id)
            .await
            .expect("Failed to list");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].new_status, Status::InProgress);
        assert_eq!(entries[0].changed_by_name.as_deref(), Some("Alice Admin"));
        assert!(entries[1].is_creation());
        assert_eq!(entries[1].comment.as_deref(), Some("Ticket created"));
    }

    #[tokio::test]
    async fn test_timestamp_ties_break_by_insertion_order() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let now = Utc::now();
        let id = TicketStore::insert(
            &mut conn,
            &TicketNumber::from_suffix(1),
            "s",
            "d",
            Priority::Medium,
            fixture.reporter,
            now,
        )
        .await
        .expect("Failed to insert ticket");

        // Both entries share one timestamp
        HistoryStore::append(&mut conn, id, None, Status::Open, fixture.reporter, None, now)
            .await
            .expect("Failed to append");
        HistoryStore::append(
            &mut conn,
            id,
            Some(Status::Open),
            Status::Closed,
            fixture.reporter,
            None,
            now,
        )
        .await
        .expect("Failed to append");

        let entries = HistoryStore::list_for_ticket(&mut conn, id)
            .await
            .expect("Failed to list");
        assert_eq!(entries[0].new_status, Status::Closed);
        assert_eq!(entries[1].new_status, Status::Open);
    }
}
