//! Ticket update handler

use super::HandlerContext;
use crate::core::{Status, TicketId, UpdateTicketRequest, UserId};
use crate::error::Result;
use crate::storage::TicketStore;

/// Parameters for updating a ticket
pub struct UpdateParams {
    pub ticket_id: i64,
    pub assign: Option<i64>,
    pub unassign: bool,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub actor: i64,
}

/// Handle the `update` command
///
/// The update request always carries the full desired assignee value, so
/// when neither `--assign` nor `--unassign` is given the current
/// assignment is read first and carried over unchanged.
pub async fn handle_update_command(params: UpdateParams, ctx: &HandlerContext) -> Result<()> {
    let ticket_id = TicketId(params.ticket_id);
    let status = params
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;

    let assigned_to = if params.unassign {
        None
    } else if let Some(id) = params.assign {
        Some(UserId(id))
    } else {
        let mut conn = ctx.db.acquire().await?;
        TicketStore::fetch_required(&mut conn, ticket_id)
            .await?
            .assigned_to
    };

    let request = UpdateTicketRequest {
        ticket_id,
        assigned_to,
        status,
        updated_by: UserId(params.actor),
        comment: params.comment,
    };

    let ticket = ctx.coordinator.update_ticket(&request).await?;

    if !ctx.formatter.print_json(&ticket) {
        ctx.formatter.success(&format!(
            "Updated ticket {} (status: {})",
            ticket.number, ticket.status
        ));
    }
    Ok(())
}
