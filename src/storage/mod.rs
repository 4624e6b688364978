//! SQLite-backed storage layer
//!
//! [`Database`] owns the connection pool and the schema. Every store in
//! the submodules is a set of associated functions over a raw
//! `SqliteConnection`, so the same operation runs identically on a pooled
//! connection or inside a [`UnitOfWork`] — and a sub-operation can never
//! commit on its own. Only the lifecycle coordinator opens and commits
//! units of work.

pub mod comments;
pub mod history;
pub mod numbers;
pub mod tickets;
pub mod users;

pub use comments::CommentStore;
pub use history::HistoryStore;
pub use tickets::TicketStore;
pub use users::UserStore;

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use tracing::debug;

/// An explicit transaction boundary
///
/// Passed to every store operation that must commit or roll back together.
/// Dropping it without committing rolls everything back.
pub type UnitOfWork = Transaction<'static, Sqlite>;

/// Table definitions, applied idempotently at connect time
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        full_name TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'user',
        email TEXT,
        created_at TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS tickets (
        ticket_id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_number TEXT NOT NULL UNIQUE,
        subject TEXT NOT NULL,
        description TEXT NOT NULL,
        priority TEXT NOT NULL DEFAULT 'medium',
        status TEXT NOT NULL DEFAULT 'open',
        created_by INTEGER NOT NULL REFERENCES users(user_id),
        assigned_to INTEGER REFERENCES users(user_id),
        created_at TEXT NOT NULL,
        last_modified_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS ticket_status_history (
        history_id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_id INTEGER NOT NULL REFERENCES tickets(ticket_id),
        old_status TEXT,
        new_status TEXT NOT NULL,
        changed_by INTEGER NOT NULL REFERENCES users(user_id),
        changed_at TEXT NOT NULL,
        comment TEXT
    )",
    "CREATE TABLE IF NOT EXISTS ticket_comments (
        comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_id INTEGER NOT NULL REFERENCES tickets(ticket_id),
        comment_text TEXT NOT NULL,
        commented_by INTEGER NOT NULL REFERENCES users(user_id),
        is_internal INTEGER NOT NULL DEFAULT 0,
        commented_at TEXT NOT NULL
    )",
];

/// Handle to the ticket database
///
/// Cheap to clone; all clones share one pool. Connections are acquired
/// per logical operation and released on every exit path.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using the given configuration and apply the schema
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.apply_schema().await?;
        debug!(url = %config.url, "connected to ticket database");
        Ok(db)
    }

    /// Connect to a fresh in-memory database
    ///
    /// The pool is pinned to a single connection: each SQLite in-memory
    /// connection is its own private database, so a wider pool would hand
    /// out empty databases.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.apply_schema().await?;
        Ok(db)
    }

    async fn apply_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Acquire a connection for a single logical operation
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Open a unit of work
    ///
    /// The caller is responsible for committing; anything else rolls back.
    pub async fn begin(&self) -> Result<UnitOfWork> {
        Ok(self.pool.begin().await?)
    }
}
