//! User directory
//!
//! The lifecycle core only reads from this store: display-name resolution
//! on the read side and credential checks. The provisioning insert exists
//! for the CLI glue and tests.

use crate::core::{NewUser, Role, User, UserId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

const USER_COLUMNS: &str =
    "user_id, username, full_name, role, email, created_at, is_active";

/// Persistence operations for users
pub struct UserStore;

impl UserStore {
    /// Provision a new user
    pub async fn insert(
        conn: &mut SqliteConnection,
        user: &NewUser,
        now: DateTime<Utc>,
    ) -> Result<UserId> {
        let result = sqlx::query(
            "INSERT INTO users (username, password, full_name, role, email, created_at, is_active)
             VALUES (?, ?, ?, ?, ?, ?, 1)",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(user.role)
        .bind(&user.email)
        .bind(now)
        .execute(&mut *conn)
        .await?;

        let id = UserId(result.last_insert_rowid());
        debug!(%id, username = %user.username, "provisioned user");
        Ok(id)
    }

    /// Load a user by ID
    pub async fn fetch(conn: &mut SqliteConnection, id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Check credentials against stored values
    ///
    /// Returns the matching active user, or `None` when the credentials
    /// do not match. Values are compared literally; credential policy
    /// (hashing, lockout) is outside this crate.
    pub async fn authenticate(
        conn: &mut SqliteConnection,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE username = ? AND password = ? AND is_active = 1"
        ))
        .bind(username)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// All active users
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE is_active = 1 ORDER BY user_id"
        ))
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }

    /// All active admins
    pub async fn list_admins(conn: &mut SqliteConnection) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = ? AND is_active = 1 ORDER BY user_id"
        ))
        .bind(Role::Admin)
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_fetch_omits_credentials() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let user = UserStore::fetch(&mut conn, fixture.admin)
            .await
            .expect("Failed to fetch")
            .expect("Admin should exist");
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_authenticate_matches_stored_values() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let user = UserStore::authenticate(&mut conn, "alice", "alice-pw")
            .await
            .expect("Failed to authenticate");
        assert!(user.is_some());

        let wrong = UserStore::authenticate(&mut conn, "alice", "nope")
            .await
            .expect("Failed to authenticate");
        assert!(wrong.is_none());

        let unknown = UserStore::authenticate(&mut conn, "mallory", "alice-pw")
            .await
            .expect("Failed to authenticate");
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_list_admins_filters_by_role() {
        let fixture = TestDatabase::new().await;
        let mut conn = fixture.db.acquire().await.expect("Failed to acquire");

        let admins = UserStore::list_admins(&mut conn)
            .await
            .expect("Failed to list admins");
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].id, fixture.admin);

        let all = UserStore::list(&mut conn).await.expect("Failed to list");
        assert_eq!(all.len(), 2);
    }
}
