//! ticket-desk - A support ticket lifecycle and persistence engine
//!
//! This crate tracks support tickets through their lifecycle
//! (open → in progress → closed) with:
//! - An append-only audit trail of every status transition
//! - A comment thread per ticket with staff-only visibility flags
//! - Atomic multi-table updates through an explicit unit of work
//! - A closed-ticket lock: closed tickets reject further updates
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_desk::core::CreateTicketRequest;
//! use ticket_desk::lifecycle::LifecycleCoordinator;
//! use ticket_desk::storage::Database;
//!
//! let db = Database::connect(&config.database).await?;
//! let coordinator = LifecycleCoordinator::new(db);
//!
//! let ticket = coordinator.create_ticket(&request).await?;
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lifecycle;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
