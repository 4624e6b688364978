//! Ticket creation handler

use super::HandlerContext;
use crate::core::{CreateTicketRequest, Priority, UserId};
use crate::error::Result;

/// Parameters for creating a ticket
pub struct CreateParams {
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub created_by: i64,
}

/// Handle the `create` command
pub async fn handle_create_command(params: CreateParams, ctx: &HandlerContext) -> Result<()> {
    let priority: Priority = params.priority.parse()?;

    let request = CreateTicketRequest {
        subject: params.subject,
        description: params.description,
        priority,
        created_by: UserId(params.created_by),
    };

    let ticket = ctx.coordinator.create_ticket(&request).await?;

    if !ctx.formatter.print_json(&ticket) {
        ctx.formatter.success(&format!(
            "Created ticket {} (id {})",
            ticket.number, ticket.id
        ));
    }
    Ok(())
}
