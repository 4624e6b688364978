//! Command-line interface
//!
//! The CLI is the caller layer around the lifecycle core: it parses
//! arguments, resolves configuration, and hands plain request records to
//! the coordinator. No transactional logic lives here.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Support ticket lifecycle tracker
#[derive(Parser)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, env = "TICKET_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the ticket database
    Init,

    /// Create a new ticket
    Create {
        /// Short summary of the issue
        #[arg(short, long)]
        subject: String,

        /// Full description
        #[arg(short, long)]
        description: String,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// ID of the reporting user
        #[arg(long)]
        created_by: i64,
    },

    /// Show a ticket with its history and comments
    Show {
        /// Ticket ID
        ticket_id: i64,
    },

    /// List tickets, newest first
    List {
        /// Only tickets created by this user
        #[arg(long)]
        user: Option<i64>,
    },

    /// Update a ticket's status and assignment
    Update {
        /// Ticket ID
        ticket_id: i64,

        /// Assign the ticket to this user
        #[arg(long, conflicts_with = "unassign")]
        assign: Option<i64>,

        /// Clear the current assignment
        #[arg(long)]
        unassign: bool,

        /// New status: open, in-progress, or closed
        #[arg(long)]
        status: Option<String>,

        /// Attach an internal comment to the update
        #[arg(long)]
        comment: Option<String>,

        /// ID of the acting user
        #[arg(long)]
        actor: i64,
    },

    /// Add a comment to a ticket
    Comment {
        /// Ticket ID
        ticket_id: i64,

        /// Comment text
        #[arg(short, long)]
        text: String,

        /// ID of the commenting user
        #[arg(long)]
        author: i64,

        /// Mark the comment as staff-only
        #[arg(long)]
        internal: bool,
    },

    /// Manage users
    #[command(subcommand)]
    User(UserCommands),
}

/// User management commands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Add a user
    Add {
        /// Login name
        username: String,

        /// Display name
        #[arg(long)]
        full_name: String,

        /// Role: user or admin
        #[arg(long, default_value = "user")]
        role: String,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Password, stored as given
        #[arg(long)]
        password: String,
    },

    /// List users
    List {
        /// Only admins
        #[arg(long)]
        admins: bool,
    },
}
