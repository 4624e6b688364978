//! Output formatting for the CLI
//!
//! Supports human-readable colored output and machine-readable JSON,
//! selected by the top-level `--json` and `--no-color` flags.

use crate::core::{Ticket, TicketDetails, User};
use colored::Colorize;
use serde::Serialize;

/// Formats command results for the terminal
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter
    ///
    /// `no_color` disables ANSI colors globally; `json` switches every
    /// command to JSON output on stdout.
    #[must_use]
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    /// Whether JSON output is selected
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Display a success message (suppressed in JSON mode)
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "✓".green());
        }
    }

    /// Display an informational message (suppressed in JSON mode)
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Display an error message on stderr
    pub fn error(&self, message: &str) {
        if self.json {
            let payload = serde_json::json!({ "success": false, "message": message });
            eprintln!("{payload}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Serialize a value to stdout when in JSON mode
    ///
    /// Returns true if the value was printed, so text-mode rendering can
    /// run otherwise.
    pub fn print_json<T: Serialize>(&self, value: &T) -> bool {
        if self.json {
            match serde_json::to_string_pretty(value) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("Failed to serialize output: {e}"),
            }
            true
        } else {
            false
        }
    }

    /// Render a single ticket as a summary line
    pub fn print_ticket_line(&self, ticket: &Ticket) {
        let assignee = ticket
            .assigned_to_name
            .as_deref()
            .unwrap_or("unassigned");
        println!(
            "{} [{}] {} ({}, {}, assigned: {assignee})",
            ticket.number.as_str().cyan(),
            ticket.id,
            ticket.subject.bold(),
            ticket.status,
            ticket.priority,
        );
    }

    /// Render a list of tickets
    pub fn print_ticket_list(&self, tickets: &[Ticket]) {
        if self.print_json(&tickets) {
            return;
        }
        if tickets.is_empty() {
            println!("No tickets found");
            return;
        }
        for ticket in tickets {
            self.print_ticket_line(ticket);
        }
        println!("\n{} ticket(s)", tickets.len());
    }

    /// Render a ticket with its history and comments
    pub fn print_details(&self, details: &TicketDetails) {
        if self.print_json(details) {
            return;
        }

        let ticket = &details.ticket;
        println!("{} {}", ticket.number.as_str().cyan().bold(), ticket.subject.bold());
        println!("  Status:     {}", ticket.status);
        println!("  Priority:   {}", ticket.priority);
        println!(
            "  Created by: {} at {}",
            ticket.created_by_name.as_deref().unwrap_or("unknown"),
            ticket.created_at.format("%Y-%m-%d %H:%M:%S")
        );
        println!(
            "  Assigned:   {}",
            ticket.assigned_to_name.as_deref().unwrap_or("unassigned")
        );
        println!("  Modified:   {}", ticket.last_modified_at.format("%Y-%m-%d %H:%M:%S"));
        println!("\n  {}", ticket.description);

        if !details.history.is_empty() {
            println!("\n{}", "History".bold());
            for entry in &details.history {
                let old = entry
                    .old_status
                    .map_or_else(|| "—".to_string(), |s| s.to_string());
                let actor = entry.changed_by_name.as_deref().unwrap_or("unknown");
                let note = entry
                    .comment
                    .as_deref()
                    .map(|c| format!(" — {c}"))
                    .unwrap_or_default();
                println!(
                    "  {} {old} → {} by {actor}{note}",
                    entry.changed_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.new_status,
                );
            }
        }

        if !details.comments.is_empty() {
            println!("\n{}", "Comments".bold());
            for comment in &details.comments {
                let author = comment.commented_by_name.as_deref().unwrap_or("unknown");
                let marker = if comment.internal { " [internal]" } else { "" };
                println!(
                    "  {} {author}{marker}: {}",
                    comment.commented_at.format("%Y-%m-%d %H:%M:%S"),
                    comment.text,
                );
            }
        }
    }

    /// Render a list of users
    pub fn print_user_list(&self, users: &[User]) {
        if self.print_json(&users) {
            return;
        }
        if users.is_empty() {
            println!("No users found");
            return;
        }
        for user in users {
            println!(
                "{} {} <{}> ({})",
                user.id,
                user.full_name.bold(),
                user.username,
                user.role,
            );
        }
    }
}
