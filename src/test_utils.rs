//! Test utilities for ticket-desk
//!
//! Common fixtures shared by the unit tests: an in-memory database with
//! two seeded users and a coordinator over it.

#![cfg(test)]

use crate::core::{CreateTicketRequest, NewUser, Priority, Role, UserId};
use crate::lifecycle::LifecycleCoordinator;
use crate::storage::{Database, UserStore};
use chrono::Utc;

/// Test fixture wrapping an in-memory database with seeded users
pub struct TestDatabase {
    pub db: Database,
    /// Seeded admin "alice" (password `alice-pw`)
    pub admin: UserId,
    /// Seeded regular user "bob" (password `bob-pw`)
    pub reporter: UserId,
}

impl TestDatabase {
    /// Create a fresh in-memory database with two users
    pub async fn new() -> Self {
        let db = Database::connect_in_memory()
            .await
            .expect("Failed to create in-memory database");

        let mut conn = db.acquire().await.expect("Failed to acquire connection");
        let now = Utc::now();

        let admin = UserStore::insert(
            &mut conn,
            &NewUser {
                username: "alice".to_string(),
                password: "alice-pw".to_string(),
                full_name: "Alice Admin".to_string(),
                role: Role::Admin,
                email: Some("alice@example.com".to_string()),
            },
            now,
        )
        .await
        .expect("Failed to seed admin");

        let reporter = UserStore::insert(
            &mut conn,
            &NewUser {
                username: "bob".to_string(),
                password: "bob-pw".to_string(),
                full_name: "Bob Reporter".to_string(),
                role: Role::User,
                email: None,
            },
            now,
        )
        .await
        .expect("Failed to seed reporter");

        drop(conn);

        Self {
            db,
            admin,
            reporter,
        }
    }

    /// A coordinator sharing this fixture's database
    pub fn coordinator(&self) -> LifecycleCoordinator {
        LifecycleCoordinator::new(self.db.clone())
    }
}

/// Shorthand for a medium-priority create request
pub fn create_request(subject: &str, description: &str, created_by: UserId) -> CreateTicketRequest {
    CreateTicketRequest {
        subject: subject.to_string(),
        description: description.to_string(),
        priority: Priority::Medium,
        created_by,
    }
}
