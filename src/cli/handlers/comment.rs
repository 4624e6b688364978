//! Comment handler

use super::HandlerContext;
use crate::core::{AddCommentRequest, TicketId, UserId};
use crate::error::Result;

/// Handle the `comment` command
pub async fn handle_comment_command(
    ticket_id: i64,
    text: String,
    author: i64,
    internal: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let request = AddCommentRequest {
        ticket_id: TicketId(ticket_id),
        text,
        commented_by: UserId(author),
        internal,
    };

    ctx.coordinator.add_comment(&request).await?;
    ctx.formatter.success("Comment added");
    Ok(())
}
