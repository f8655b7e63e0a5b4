//! Upload Routes
//!
//! Authenticated file upload plus public serving of stored files.

mod handler;

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;
use crate::storage::StorageError;

/// Serve-file response
enum UploadFileResponse {
    Ok(Bytes, String),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for UploadFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            UploadFileResponse::Ok(content, content_type) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
                .into_response(),
            UploadFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            UploadFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve a stored file by name
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> UploadFileResponse {
    match state.get_storage().get(&filename).await {
        Ok(Some(content)) => {
            let content_type = mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string();
            UploadFileResponse::Ok(content.into(), content_type)
        }
        Ok(None) => UploadFileResponse::NotFound,
        Err(StorageError::InvalidFilename(_)) => UploadFileResponse::BadRequest("Invalid filename"),
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "Failed to read stored file");
            UploadFileResponse::NotFound
        }
    }
}

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new()
        // Upload API - authentication required
        .route("/api/upload", post(handler::upload))
        // Serve uploaded files - public access
        .route("/uploads/{filename}", get(serve_uploaded_file))
}
