//! Comment thread storage

use crate::core::{TicketComment, TicketId, UserId};
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

/// Persistence operations for ticket comments
pub struct CommentStore;

impl CommentStore {
    /// Append a comment to a ticket's thread
    pub async fn append(
        conn: &mut SqliteConnection,
        ticket_id: TicketId,
        text: &str,
        commented_by: UserId,
        internal: bool,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if text.trim().is_empty() {
            return Err(TicketDeskError::Validation(
                "Comment text is required".to_string(),
            ));
        }

        sqlx::query(
            "INSERT INTO ticket_comments
             (ticket_id, comment_text, commented_by, is_internal, commented_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(ticket_id)
        .bind(text)
        .bind(commented_by)
        .bind(internal)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        debug!(%ticket_id, internal, "appended comment");
        Ok(())
    }

    /// Comments for a ticket, newest first, with author names resolved
    pub async fn list_for_ticket(
        conn: &mut SqliteConnection,
        ticket_id: TicketId,
    ) -> Result<Vec<TicketComment>> {
        let comments = sqlx::query_as::<_, TicketComment>(
            "SELECT c.comment_id, c.ticket_id, c.comment_text, c.commented_by,
                    c.is_internal, c.commented_at, u.full_name AS commented_by_name
             FROM ticket_comments c
             LEFT JOIN users u ON c.commented_by = u.user_id
             WHERE c.ticket_id = ?
             ORDER BY c.commented_at DESC, c.comment_id DESC",
        )
        .bind(ticket_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, TicketNumber};
    use crate::storage::TicketStore;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_append_rejects_blank_text() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let result = CommentStore::append(
            &mut conn,
            TicketId(1),
            "  \n",
            fixture.reporter,
            false,
            Utc::now(),
        )
        .await;

        assert!(matches!(result, Err(TicketDeskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_append_and_list() {
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

        CommentStore::append(&mut conn, id, "Looking into it", fixture.admin, true, now)
            .await
            .expect("Failed to append");
        CommentStore::append(
            &mut conn,
            id,
            "Any update?",
            fixture.reporter,
            false,
            now + chrono::Duration::seconds(5),
        )
        .await
        .expect("Failed to append");

        let comments = CommentStore::list_for_ticket(&mut conn, id)
            .await
            .expect("Failed to list");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "Any update?");
        assert!(!comments[0].internal);
        assert_eq!(comments[1].commented_by_name.as_deref(), Some("Alice Admin"));
        assert!(comments[1].internal);
    }
}
