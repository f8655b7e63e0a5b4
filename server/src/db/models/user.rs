//! User account model

use serde::{Deserialize, Serialize};
use shared::client::UserInfo;
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User account matching the database table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing)]
    pub id: Option<UserId>,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    /// Role name: "admin" | "staff"
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp (unix seconds)
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Public user payload (never includes the password hash)
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role: self.role.clone(),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = User::hash_password("hunter2").unwrap();
        let user = User {
            id: None,
            username: "jdoe".into(),
            display_name: "Jane Doe".into(),
            hash_pass: hash,
            role: "staff".into(),
            is_active: true,
            created_at: 0,
        };

        assert!(user.verify_password("hunter2").unwrap());
        assert!(!user.verify_password("hunter3").unwrap());
    }
}
