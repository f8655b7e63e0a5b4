//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login, current user, logout
//! - [`employees`] - employee management
//! - [`upload`] - file upload and serving

pub mod auth;
pub mod employees;
pub mod health;
pub mod upload;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    // Multipart bodies carry some framing overhead on top of the file
    let body_limit = state.config.max_upload_size as usize + 1024 * 1024;
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
        .merge(upload::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
