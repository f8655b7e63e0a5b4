use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::storage::{LocalStorage, UploadStorage};

/// Server state — single shared handle to every service
///
/// Held by every handler through axum's `State` extractor. Cloning is
/// cheap: the database handle and services are reference counted.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | jwt_service | Arc<JwtService> | Token issuing/validation |
/// | storage | Arc<dyn UploadStorage> | Upload persistence |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
    /// Upload storage backend
    pub storage: Arc<dyn UploadStorage>,
}

impl ServerState {
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        jwt_service: Arc<JwtService>,
        storage: Arc<dyn UploadStorage>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            storage,
        }
    }

    /// Initialize the server state
    ///
    /// Order: work directory structure, database, storage, JWT service.
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be initialized
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_dir())
            .await
            .expect("Failed to initialize database");

        let storage = Arc::new(LocalStorage::new(config.upload_dir(), "/uploads"));
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self::new(config.clone(), db_service.db, jwt_service, storage)
    }

    /// Initialize with an in-memory database (tests, tooling)
    pub async fn initialize_in_memory(config: &Config) -> Self {
        let db_service = DbService::in_memory()
            .await
            .expect("Failed to initialize in-memory database");

        let storage = Arc::new(LocalStorage::new(
            PathBuf::from(&config.work_dir).join("uploads"),
            "/uploads",
        ));
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self::new(config.clone(), db_service.db, jwt_service, storage)
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Upload storage handle
    pub fn get_storage(&self) -> Arc<dyn UploadStorage> {
        self.storage.clone()
    }
}
