use super::status::{Priority, Status};
use super::ticket::{Ticket, TicketId, TicketNumber};
use super::user::UserId;
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Mostly useful for tests and fixtures; production tickets come out of
/// the store with their id and number assigned by the database.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    number: Option<TicketNumber>,
    subject: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    created_by: Option<UserId>,
    assigned_to: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
    last_modified_at: Option<DateTime<Utc>>,
    created_by_name: Option<String>,
    assigned_to_name: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the ticket number
    #[must_use]
    pub fn number(mut self, number: TicketNumber) -> Self {
        self.number = Some(number);
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the creator
    #[must_use]
    pub const fn created_by(mut self, created_by: UserId) -> Self {
        self.created_by = Some(created_by);
        self
    }

    /// Set the assignee
    #[must_use]
    pub const fn assigned_to(mut self, assigned_to: UserId) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `last_modified_at` timestamp
    #[must_use]
    pub const fn last_modified_at(mut self, last_modified_at: DateTime<Utc>) -> Self {
        self.last_modified_at = Some(last_modified_at);
        self
    }

    /// Set the resolved creator display name
    #[must_use]
    pub fn created_by_name(mut self, name: impl Into<String>) -> Self {
        self.created_by_name = Some(name.into());
        self
    }

    /// Set the resolved assignee display name
    #[must_use]
    pub fn assigned_to_name(mut self, name: impl Into<String>) -> Self {
        self.assigned_to_name = Some(name.into());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ticket {
            id: self.id.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_by: self.created_by.unwrap_or_default(),
            assigned_to: self.assigned_to,
            created_at,
            last_modified_at: self.last_modified_at.unwrap_or(created_at),
            created_by_name: self.created_by_name,
            assigned_to_name: self.assigned_to_name,
        }
    }
}
