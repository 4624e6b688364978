//! Ticket details handler

use super::HandlerContext;
use crate::core::TicketId;
use crate::error::Result;

/// Handle the `show` command
pub async fn handle_show_command(ticket_id: i64, ctx: &HandlerContext) -> Result<()> {
    let details = ctx.coordinator.ticket_details(TicketId(ticket_id)).await?;
    ctx.formatter.print_details(&details);
    Ok(())
}
