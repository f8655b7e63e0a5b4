use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Default allowed upload extensions
pub const DEFAULT_ALLOWED_UPLOAD_TYPES: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "pdf", "doc", "docx", "xls", "xlsx",
];

/// Default maximum upload size in bytes
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10_000_000;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/ems | Work directory (database, uploads, logs) |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | Runtime environment |
/// | MAX_UPLOAD_SIZE | 10000000 | Upload size cap (bytes) |
/// | ALLOWED_UPLOAD_TYPES | jpg,jpeg,png,... | Comma-separated extension allowlist |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (milliseconds) |
/// | JWT_SECRET | (generated in dev) | Token signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/ems HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding database, uploads and logs
    pub work_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default upload size cap in bytes
    pub max_upload_size: u64,
    /// Default extension allowlist for uploads (lowercase)
    pub allowed_upload_types: Vec<String>,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/ems".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            max_upload_size: std::env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE),
            allowed_upload_types: std::env::var("ALLOWED_UPLOAD_TYPES")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_lowercase())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    DEFAULT_ALLOWED_UPLOAD_TYPES
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                }),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory the embedded database lives in
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory uploaded files are persisted to
    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads")
    }

    /// Create the work directory structure if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.upload_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
