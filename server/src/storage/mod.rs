//! Upload storage abstraction
//!
//! Handlers never touch the filesystem directly; they hand validated
//! bytes to an [`UploadStorage`] implementation and get back where the
//! file lives. Swapping local disk for object storage only means another
//! implementation of the trait.

pub mod local;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use local::LocalStorage;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata accompanying an upload
#[derive(Debug, Clone)]
pub struct UploadMetadata {
    /// Filename as supplied by the client
    pub original_name: String,
    /// Lowercased extension
    pub extension: String,
}

/// Where an accepted upload ended up
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Generated unique storage name
    pub name: String,
    /// Filesystem (or backend) path
    pub path: PathBuf,
    /// Public URL the file is served from
    pub url: String,
    /// Size in bytes
    pub size: u64,
}

/// Persistence backend for uploaded files
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Persist `data` under a freshly generated unique name
    async fn put(&self, data: &[u8], meta: &UploadMetadata) -> Result<StoredFile, StorageError>;

    /// Fetch a stored file's bytes by its storage name
    ///
    /// Returns `Ok(None)` when no such file exists.
    async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
