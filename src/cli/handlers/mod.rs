//! Command handlers
//!
//! Each handler validates its input, hands a request record to the
//! lifecycle coordinator (writes) or the stores (reads), and formats the
//! result. Handlers never open transactions themselves.

mod comment;
mod create;
mod init;
mod list;
mod show;
mod update;
mod user;

pub use comment::handle_comment_command;
pub use create::{CreateParams, handle_create_command};
pub use init::handle_init_command;
pub use list::handle_list_command;
pub use show::handle_show_command;
pub use update::{UpdateParams, handle_update_command};
pub use user::{handle_user_add_command, handle_user_list_command};

use crate::cli::output::OutputFormatter;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::lifecycle::LifecycleCoordinator;
use crate::storage::Database;

/// Context shared by all handlers
///
/// Owns the database handle and the coordinator built over it.
pub struct HandlerContext {
    pub db: Database,
    pub coordinator: LifecycleCoordinator,
    pub formatter: OutputFormatter,
}

impl HandlerContext {
    /// Connect to the configured database and build the context
    pub async fn new(config: &DeskConfig, formatter: OutputFormatter) -> Result<Self> {
        let db = Database::connect(&config.database).await?;
        let coordinator = LifecycleCoordinator::new(db.clone());
        Ok(Self {
            db,
            coordinator,
            formatter,
        })
    }
}
