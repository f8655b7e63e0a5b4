//! User Repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Number of user accounts
    pub async fn count(&self) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct Count {
            count: i64,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM user GROUP ALL")
            .await?;
        let count: Option<Count> = result.take(0)?;
        Ok(count.map(|c| c.count).unwrap_or(0))
    }

    /// Create a new user account
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        display_name: &str,
        role: &str,
    ) -> RepoResult<User> {
        if self.find_by_username(username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let hash_pass = User::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    username = $username,
                    display_name = $display_name,
                    hash_pass = $hash_pass,
                    role = $role,
                    is_active = true,
                    created_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("username", username.to_string()))
            .bind(("display_name", display_name.to_string()))
            .bind(("hash_pass", hash_pass))
            .bind(("role", role.to_string()))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
