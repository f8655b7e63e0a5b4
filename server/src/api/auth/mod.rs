//! Authentication API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Auth router
///
/// `/api/auth/login` is public; the rest sits behind the auth middleware.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
