//! Local-disk upload storage

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use super::{StorageError, StoredFile, UploadMetadata, UploadStorage};

/// Stores uploads as files under a single directory
///
/// Names follow `<nonce>_<sanitized original basename>`: the nonce makes
/// concurrent uploads of the same original name land on distinct files.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }

    /// Reduce a client-supplied filename to a safe basename
    ///
    /// Path separators are stripped, anything outside `[A-Za-z0-9._-]`
    /// becomes `_`, and the result is capped at 64 characters.
    fn sanitize_basename(original: &str) -> String {
        let basename = original
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(original)
            .trim_start_matches('.');

        let mut cleaned: String = basename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if cleaned.len() > 64 {
            cleaned.truncate(64);
        }
        if cleaned.is_empty() {
            cleaned.push_str("file");
        }
        cleaned
    }

    /// Generate a unique storage name for an upload
    fn unique_name(original: &str) -> String {
        format!(
            "{}_{}",
            Uuid::new_v4().simple(),
            Self::sanitize_basename(original)
        )
    }

    /// Reject names that could escape the storage directory
    fn validate_name(name: &str) -> Result<(), StorageError> {
        if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
            return Err(StorageError::InvalidFilename(name.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UploadStorage for LocalStorage {
    async fn put(&self, data: &[u8], meta: &UploadMetadata) -> Result<StoredFile, StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let name = Self::unique_name(&meta.original_name);
        let path = self.root.join(&name);

        tokio::fs::write(&path, data).await?;

        let url = format!("{}/{}", self.public_base.trim_end_matches('/'), name);

        Ok(StoredFile {
            name,
            path,
            url,
            size: data.len() as u64,
        })
    }

    async fn get(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Self::validate_name(name)?;

        match tokio::fs::read(self.root.join(name)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(original: &str, ext: &str) -> UploadMetadata {
        UploadMetadata {
            original_name: original.to_string(),
            extension: ext.to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_twice_same_name_produces_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "/uploads");

        let first = storage.put(b"one", &meta("a.png", "png")).await.unwrap();
        let second = storage.put(b"two", &meta("a.png", "png")).await.unwrap();

        assert_ne!(first.name, second.name);
        assert_eq!(
            storage.get(&first.name).await.unwrap().unwrap(),
            b"one".to_vec()
        );
        assert_eq!(
            storage.get(&second.name).await.unwrap().unwrap(),
            b"two".to_vec()
        );
    }

    #[tokio::test]
    async fn test_stored_name_keeps_sanitized_basename() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "/uploads");

        let stored = storage
            .put(b"data", &meta("../etc/pass wd?.png", "png"))
            .await
            .unwrap();

        assert!(stored.name.ends_with("pass_wd_.png"));
        assert!(!stored.name.contains('/'));
        assert!(stored.url.starts_with("/uploads/"));
    }

    #[tokio::test]
    async fn test_get_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "/uploads");
        assert!(storage.get("nope.png").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "/uploads");
        assert!(matches!(
            storage.get("../secret").await,
            Err(StorageError::InvalidFilename(_))
        ));
        assert!(matches!(
            storage.get("a/b.png").await,
            Err(StorageError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_sanitize_basename() {
        assert_eq!(LocalStorage::sanitize_basename("photo.png"), "photo.png");
        assert_eq!(
            LocalStorage::sanitize_basename("my photo (1).png"),
            "my_photo__1_.png"
        );
        assert_eq!(
            LocalStorage::sanitize_basename("/tmp/../x/report.pdf"),
            "report.pdf"
        );
        assert_eq!(LocalStorage::sanitize_basename(""), "file");
    }
}
