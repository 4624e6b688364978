//! User provisioning and listing handlers
//!
//! Provisioning is glue around the core: the lifecycle engine itself
//! never mutates users.

use super::HandlerContext;
use crate::core::{NewUser, Role};
use crate::error::Result;
use crate::storage::UserStore;
use chrono::Utc;

/// Handle the `user add` command
pub async fn handle_user_add_command(
    username: String,
    password: String,
    full_name: String,
    role: String,
    email: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let role: Role = role.parse()?;
    let user = NewUser {
        username,
        password,
        full_name,
        role,
        email,
    };

    let mut conn = ctx.db.acquire().await?;
    let id = UserStore::insert(&mut conn, &user, Utc::now()).await?;

    ctx.formatter
        .success(&format!("Added user '{}' (id {id})", user.username));
    Ok(())
}

/// Handle the `user list` command
pub async fn handle_user_list_command(admins_only: bool, ctx: &HandlerContext) -> Result<()> {
    let mut conn = ctx.db.acquire().await?;
    let users = if admins_only {
        UserStore::list_admins(&mut conn).await?
    } else {
        UserStore::list(&mut conn).await?
    };

    ctx.formatter.print_user_list(&users);
    Ok(())
}
