//! Append-only audit trail of status transitions

use super::status::Status;
use super::ticket::TicketId;
use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One recorded status transition
///
/// `old_status` is `None` only for the initial "created" entry. Entries
/// are written exactly once per transition and never mutated or deleted;
/// they order by timestamp with insertion order breaking ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StatusHistoryEntry {
    #[sqlx(rename = "history_id")]
    pub id: i64,
    pub ticket_id: TicketId,
    pub old_status: Option<Status>,
    pub new_status: Status,
    pub changed_by: UserId,
    pub changed_at: DateTime<Utc>,
    pub comment: Option<String>,
    pub changed_by_name: Option<String>,
}

impl StatusHistoryEntry {
    /// Whether this is the entry recorded at ticket creation
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        self.old_status.is_none()
    }
}
