//! Ticket status and priority enumerations
//!
//! Both sets are closed: every transition check matches exhaustively, so
//! adding a variant forces every call site to take a position on it.

use crate::error::TicketDeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a ticket
///
/// `Closed` is terminal in the sense that a closed ticket rejects every
/// update whose target status is not also `Closed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Status {
    /// Newly created, not yet picked up
    #[default]
    Open,
    /// Someone is actively working on it
    InProgress,
    /// Resolved; frozen against further updates
    Closed,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Whether this status freezes the ticket
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Status {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "in_progress" | "inprogress" | "in progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            other => Err(TicketDeskError::InvalidInput(format!(
                "Unknown status: '{other}'. Use 'open', 'in-progress', or 'closed'"
            ))),
        }
    }
}

/// Urgency of a ticket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Priority {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TicketDeskError::InvalidInput(format!(
                "Unknown priority: '{other}'. Use 'low', 'medium', or 'high'"
            ))),
        }
    }
}
