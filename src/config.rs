//! Configuration loading
//!
//! Configuration is an explicit struct, loaded once at startup and
//! injected into the storage layer; nothing reads global state after
//! boot.

use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default database URL when nothing is configured
const DEFAULT_DATABASE_URL: &str = "sqlite:ticket-desk.db";

/// Top-level configuration for ticket-desk
#[derive(Debug, Clone, Deserialize)]
pub struct DeskConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite:ticket-desk.db`
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Create the database file if it does not exist
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            create_if_missing: true,
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from an optional file with environment overrides
    ///
    /// Settings are layered: built-in defaults, then the given file (if
    /// any), then `TICKET_DESK__*` environment variables. For example
    /// `TICKET_DESK__DATABASE__URL=sqlite::memory:` overrides the URL.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.create_if_missing", true)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("TICKET_DESK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configuration pointing at a specific database URL
    #[must_use]
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig {
                url: url.into(),
                ..DatabaseConfig::default()
            },
        }
    }
}
