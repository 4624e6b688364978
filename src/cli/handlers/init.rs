//! Database initialization handler

use super::HandlerContext;
use crate::error::Result;

/// Handle the `init` command
///
/// Connecting applies the schema idempotently, so initialization is just
/// a connect with a confirmation message.
pub fn handle_init_command(ctx: &HandlerContext) -> Result<()> {
    ctx.formatter.success("Ticket database initialized");
    Ok(())
}
