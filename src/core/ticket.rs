//! The ticket record and its identifiers

use super::status::{Priority, Status};
use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Numeric ticket identifier assigned by the store on insert
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
    sqlx::Type,
)]
#[sqlx(transparent)]
pub struct TicketId(pub i64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Human-readable ticket number in the form `TKT-NNNNN`
///
/// The numeric suffix is zero-padded to 5 digits and simply grows wider
/// past 99999. Numbers are unique and monotonically increasing across
/// creations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct TicketNumber(String);

impl TicketNumber {
    /// Prefix shared by every ticket number
    pub const PREFIX: &'static str = "TKT-";

    /// Build a ticket number from its numeric suffix
    #[must_use]
    pub fn from_suffix(suffix: i64) -> Self {
        Self(format!("{}{suffix:05}", Self::PREFIX))
    }

    /// The numeric suffix, if the stored string is well-formed
    #[must_use]
    pub fn suffix(&self) -> Option<i64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    /// The number as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A support ticket with denormalized display names
///
/// `created_by_name` and `assigned_to_name` are resolved by the read
/// queries via a join to the user directory; an unassigned ticket or a
/// vanished user yields `None`, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    #[sqlx(rename = "ticket_id")]
    pub id: TicketId,
    #[sqlx(rename = "ticket_number")]
    pub number: TicketNumber,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub created_by: UserId,
    pub assigned_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
    pub created_by_name: Option<String>,
    pub assigned_to_name: Option<String>,
}

impl Ticket {
    /// Whether the ticket is frozen against updates
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.status.is_closed()
    }
}
