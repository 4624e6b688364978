//! Request and response records exchanged with caller layers
//!
//! These are plain serde-able data with no framework envelope; a
//! transport layer wraps them in whatever success/message/payload shape
//! it needs.

use super::comment::TicketComment;
use super::history::StatusHistoryEntry;
use super::status::{Priority, Status};
use super::ticket::{Ticket, TicketId};
use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Request to create a new ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub created_by: UserId,
}

/// Request to update a ticket's assignment and/or status
///
/// The assignee is applied as given on every update: `None` clears the
/// assignment. A `None` status leaves the current status in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    pub ticket_id: TicketId,
    pub assigned_to: Option<UserId>,
    pub status: Option<Status>,
    pub updated_by: UserId,
    pub comment: Option<String>,
}

/// Request to add a comment to a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub ticket_id: TicketId,
    pub text: String,
    pub commented_by: UserId,
    #[serde(default)]
    pub internal: bool,
}

/// A ticket together with its full audit trail and comment thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDetails {
    pub ticket: Ticket,
    pub history: Vec<StatusHistoryEntry>,
    pub comments: Vec<TicketComment>,
}
