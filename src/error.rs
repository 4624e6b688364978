//! Error types for ticket-desk
//!
//! All fallible operations in the crate return [`Result`], so callers can
//! distinguish a rejected transition from a missing ticket or a storage
//! failure with a single match.

use crate::core::{TicketId, TicketNumber, UserId};
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Errors that can occur during ticket operations
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// A required field was empty or otherwise invalid
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No ticket exists with the given ID
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: TicketId },

    /// No user exists with the given ID
    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    /// The ticket is closed and the requested update would reopen or
    /// modify it. This is a normal outcome of the lifecycle rules, not a
    /// storage failure.
    #[error("Ticket {number} is closed and cannot be modified")]
    TicketClosed { number: TicketNumber },

    /// Input from the caller layer could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage I/O or transaction failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with a message
    #[error("{0}")]
    Custom(String),
}

impl TicketDeskError {
    /// Create a custom error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Whether this error is an expected lifecycle outcome rather than a
    /// fault: rejected transitions and validation failures are reported to
    /// the user without a stack of context.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::TicketClosed { .. } | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_distinguishable() {
        let closed = TicketDeskError::TicketClosed {
            number: TicketNumber::from_suffix(42),
        };
        assert!(closed.is_rejection());
        assert!(TicketDeskError::Validation("subject".into()).is_rejection());
        assert!(!TicketDeskError::TicketNotFound { id: TicketId(1) }.is_rejection());
        assert!(!TicketDeskError::Database(sqlx::Error::PoolClosed).is_rejection());
    }

    #[test]
    fn test_error_messages() {
        let err = TicketDeskError::TicketClosed {
            number: TicketNumber::from_suffix(7),
        };
        assert_eq!(
            err.to_string(),
            "Ticket TKT-00007 is closed and cannot be modified"
        );

        let err = TicketDeskError::TicketNotFound { id: TicketId(99) };
        assert_eq!(err.to_string(), "Ticket not found: 99");
    }
}
