//! File Upload Handler
//!
//! Accepts a single multipart file, validates extension and size against
//! the configured defaults (overridable per request), and hands the bytes
//! to the storage backend. Rejected uploads are never written.

use std::path::PathBuf;

use axum::Json;
use axum::extract::{Extension, Multipart, State};
use shared::ErrorCode;
use shared::models::UploadedFile;

use crate::activity_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::storage::UploadMetadata;
use crate::utils::{AppError, AppResponse, ok_with_message};

/// Per-request upload settings, after applying field overrides
struct UploadOptions {
    allowed_types: Vec<String>,
    max_size: u64,
}

impl UploadOptions {
    fn from_config(state: &ServerState) -> Self {
        Self {
            allowed_types: state.config.allowed_upload_types.clone(),
            max_size: state.config.max_upload_size,
        }
    }
}

/// Upload handler
pub async fn upload(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<Json<AppResponse<UploadedFile>>, AppError> {
    let mut options = UploadOptions::from_config(&state);
    let mut file_data: Option<Vec<u8>> = None;
    let mut original_filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref().unwrap_or_default() {
            "file" => {
                original_filename = field.file_name().map(|s| s.to_string());
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?
                        .to_vec(),
                );
            }
            "allowedTypes" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
                options.allowed_types = raw
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "maxSize" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
                options.max_size = raw.trim().parse().map_err(|_| {
                    AppError::validation(format!("Invalid maxSize value: {}", raw))
                })?;
            }
            _ => {}
        }
    }

    let data = file_data.ok_or_else(|| {
        AppError::with_message(ErrorCode::NoFileProvided, "No file uploaded")
    })?;

    let filename = original_filename
        .ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;

    if data.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }

    let ext = PathBuf::from(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !options.allowed_types.iter().any(|a| a == &ext) {
        return Err(AppError::with_message(
            ErrorCode::FileTypeNotAllowed,
            format!(
                "File type '{}' not allowed. Allowed: {}",
                ext,
                options.allowed_types.join(", ")
            ),
        ));
    }

    if data.len() as u64 > options.max_size {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            format!(
                "File is too large. Maximum size is {}MB",
                options.max_size / 1_000_000
            ),
        ));
    }

    let meta = UploadMetadata {
        original_name: filename.clone(),
        extension: ext.clone(),
    };
    let stored = state.get_storage().put(&data, &meta).await?;

    activity_log!(user.username, "upload_file", file = stored.name.clone());
    tracing::info!(
        original_name = %filename,
        stored_name = %stored.name,
        size = stored.size,
        "File uploaded successfully"
    );

    Ok(ok_with_message(
        UploadedFile {
            name: stored.name,
            original_name: filename,
            path: stored.path.to_string_lossy().into_owned(),
            url: stored.url,
            file_type: ext,
            size: stored.size,
        },
        "File uploaded successfully",
    ))
}
