//! Database Module
//!
//! Embedded SurrealDB bootstrap, schema definition and seeding.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::db::repository::UserRepository;
use crate::utils::AppError;

const NAMESPACE: &str = "ems";
const DATABASE: &str = "ems";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database under `db_dir`
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let path = db_dir.join("ems.db");
        let db = Surreal::new::<RocksDb>(path.to_string_lossy().as_ref())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        let service = Self { db };
        service.finish_init().await?;

        tracing::info!(path = %path.display(), "Database connection established");
        Ok(service)
    }

    /// Open an in-memory database (tests, tooling)
    pub async fn in_memory() -> Result<Self, AppError> {
        use surrealdb::engine::local::Mem;

        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        let service = Self { db };
        service.finish_init().await?;
        Ok(service)
    }

    async fn finish_init(&self) -> Result<(), AppError> {
        self.db
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        self.define_schema().await?;
        self.seed_default_admin().await?;
        Ok(())
    }

    /// Idempotent schema definition
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS idx_user_username ON TABLE user FIELDS username UNIQUE;
                DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS idx_employee_email ON TABLE employee FIELDS email UNIQUE;
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?;
        Ok(())
    }

    /// Create the initial admin account when the user table is empty
    ///
    /// The password comes from ADMIN_PASSWORD; without it a random one is
    /// generated and logged once so the operator can log in and rotate it.
    async fn seed_default_admin(&self) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db.clone());
        if repo.count().await? > 0 {
            return Ok(());
        }

        let (password, generated) = match std::env::var("ADMIN_PASSWORD") {
            Ok(p) => (p, false),
            Err(_) => (uuid::Uuid::new_v4().simple().to_string(), true),
        };

        repo.create("admin", &password, "Administrator", "admin")
            .await?;

        if generated {
            tracing::warn!(
                password = %password,
                "No ADMIN_PASSWORD set; created 'admin' account with a generated password. Rotate it."
            );
        } else {
            tracing::info!("Created 'admin' account from ADMIN_PASSWORD");
        }

        Ok(())
    }
}
