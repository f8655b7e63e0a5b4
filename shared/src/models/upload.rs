//! Uploaded file metadata

use serde::{Deserialize, Serialize};

/// Metadata returned after a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Stored filename (nonce-prefixed, unique)
    pub name: String,
    /// Filename as provided by the client
    pub original_name: String,
    /// Server-side storage path
    pub path: String,
    /// Public URL the file is served from
    pub url: String,
    /// Lowercased file extension
    #[serde(rename = "type")]
    pub file_type: String,
    /// Size in bytes
    pub size: u64,
}
