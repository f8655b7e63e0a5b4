//! Session state
//!
//! The authenticated context returned by login. Callers hold on to it and
//! pass it to every API call; there is no hidden global token. Expiry is
//! checked locally before each request goes out.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::client::{LoginResponse, UserInfo};
use std::path::Path;

/// An authenticated session: bearer token, its expiry, and the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// Unix timestamp (seconds) at which the token stops being valid
    pub expires_at: i64,
    pub user: UserInfo,
}

impl Session {
    /// Whether the token's expiry has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    /// Seconds until expiry (0 when already expired)
    pub fn expires_in_seconds(&self) -> i64 {
        (self.expires_at - Utc::now().timestamp()).max(0)
    }

    /// Serialize for persistence by the embedding application
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a persisted session
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Persist to a file
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Load from a file
    pub fn load_from(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(std::io::Error::other)
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.token,
            expires_at: resp.expires_at,
            user: resp.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: i64) -> Session {
        Session {
            token: "tok".to_string(),
            expires_at,
            user: UserInfo {
                id: "user:1".to_string(),
                username: "admin".to_string(),
                display_name: "Administrator".to_string(),
                role: "admin".to_string(),
                is_active: true,
            },
        }
    }

    #[test]
    fn test_expiry_check() {
        let past = session(Utc::now().timestamp() - 10);
        let future = session(Utc::now().timestamp() + 3600);

        assert!(past.is_expired());
        assert_eq!(past.expires_in_seconds(), 0);
        assert!(!future.is_expired());
        assert!(future.expires_in_seconds() > 3500);
    }

    #[test]
    fn test_json_roundtrip() {
        let s = session(1_900_000_000);
        let restored = Session::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(restored.token, "tok");
        assert_eq!(restored.expires_at, 1_900_000_000);
        assert_eq!(restored.user.username, "admin");
    }

    #[test]
    fn test_file_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let s = session(1_900_000_000);
        s.save_to(&path).unwrap();

        let restored = Session::load_from(&path).unwrap();
        assert_eq!(restored.token, s.token);
        assert_eq!(restored.user.id, s.user.id);
    }
}
