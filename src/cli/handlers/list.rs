//! Ticket listing handler
//!
//! Reads bypass the coordinator and hit the store directly.

use super::HandlerContext;
use crate::core::UserId;
use crate::error::Result;
use crate::storage::TicketStore;

/// Handle the `list` command
///
/// With `--user` only that user's tickets are shown; otherwise all
/// tickets. Restricting who may list everything is the caller's concern,
/// and for a local CLI the caller is the operator.
pub async fn handle_list_command(user: Option<i64>, ctx: &HandlerContext) -> Result<()> {
    let mut conn = ctx.db.acquire().await?;

    let tickets = match user {
        Some(id) => TicketStore::list_by_creator(&mut conn, UserId(id)).await?,
        None => TicketStore::list_all(&mut conn).await?,
    };

    ctx.formatter.print_ticket_list(&tickets);
    Ok(())
}
