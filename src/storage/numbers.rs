//! Ticket number generation
//!
//! Numbers are derived from the highest numeric suffix currently in use,
//! so they are unique and strictly increasing as long as the read and the
//! consuming insert share one transaction. SQLite's single-writer model
//! serializes that pair in-process; callers must not generate a number on
//! one connection and insert on another.

use crate::core::TicketNumber;
use crate::error::Result;
use sqlx::SqliteConnection;

/// Produce the next ticket number
///
/// Pure read: the caller consumes the number with an insert on the same
/// connection/transaction.
pub async fn next_ticket_number(conn: &mut SqliteConnection) -> Result<TicketNumber> {
    let max_suffix: Option<i64> = sqlx::query_scalar(
        "SELECT MAX(CAST(substr(ticket_number, 5) AS INTEGER)) FROM tickets",
    )
    .fetch_one(&mut *conn)
    .await?;

    Ok(TicketNumber::from_suffix(max_suffix.unwrap_or(0) + 1))
}
