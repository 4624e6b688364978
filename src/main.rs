//! ticket-desk - Support ticket lifecycle tracker
//!
//! This is the main entry point for the ticket-desk CLI. It parses
//! command-line arguments, loads configuration, and dispatches to the
//! command handlers.

use clap::Parser;
use std::process;
use ticket_desk::cli::handlers::{
    self, CreateParams, HandlerContext, UpdateParams,
};
use ticket_desk::cli::{Cli, Commands, OutputFormatter, UserCommands};
use ticket_desk::config::DeskConfig;
use ticket_desk::error::{Result, TicketDeskError};

/// Main entry point for the ticket-desk CLI
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, formatter).await {
        handle_error(&e, formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
async fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let config = DeskConfig::load(cli.config.as_deref())?;
    let ctx = HandlerContext::new(&config, formatter).await?;

    match cli.command {
        Commands::Init => handlers::handle_init_command(&ctx),
        Commands::Create {
            subject,
            description,
            priority,
            created_by,
        } => {
            handlers::handle_create_command(
                CreateParams {
                    subject,
                    description,
                    priority,
                    created_by,
                },
                &ctx,
            )
            .await
        },
        Commands::Show { ticket_id } => handlers::handle_show_command(ticket_id, &ctx).await,
        Commands::List { user } => handlers::handle_list_command(user, &ctx).await,
        Commands::Update {
            ticket_id,
            assign,
            unassign,
            status,
            comment,
            actor,
        } => {
            handlers::handle_update_command(
                UpdateParams {
                    ticket_id,
                    assign,
                    unassign,
                    status,
                    comment,
                    actor,
                },
                &ctx,
            )
            .await
        },
        Commands::Comment {
            ticket_id,
            text,
            author,
            internal,
        } => handlers::handle_comment_command(ticket_id, text, author, internal, &ctx).await,
        Commands::User(UserCommands::Add {
            username,
            full_name,
            role,
            email,
            password,
        }) => {
            handlers::handle_user_add_command(username, password, full_name, role, email, &ctx)
                .await
        },
        Commands::User(UserCommands::List { admins }) => {
            handlers::handle_user_list_command(admins, &ctx).await
        },
    }
}

/// Display an error to the user
fn handle_error(error: &TicketDeskError, formatter: OutputFormatter) {
    formatter.error(&error.to_string());
}
