//! Remarks attached to a ticket

use super::ticket::TicketId;
use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single comment on a ticket, immutable once created
///
/// Internal comments are meant for staff eyes only; the core stores the
/// flag and leaves visibility filtering to the caller layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TicketComment {
    #[sqlx(rename = "comment_id")]
    pub id: i64,
    pub ticket_id: TicketId,
    #[sqlx(rename = "comment_text")]
    pub text: String,
    pub commented_by: UserId,
    #[sqlx(rename = "is_internal")]
    pub internal: bool,
    pub commented_at: DateTime<Utc>,
    pub commented_by_name: Option<String>,
}
