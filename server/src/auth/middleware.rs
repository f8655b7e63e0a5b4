//! Authentication middleware
//!
//! Axum middleware for JWT authentication and the admin gate.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::ErrorCode;

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Authentication middleware — requires a logged-in user
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`.
/// On success a [`CurrentUser`] is injected into the request extensions.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/` (health, uploaded files)
/// - `/api/auth/login`
///
/// # Errors
///
/// | Failure | Response |
/// |---------|----------|
/// | No Authorization header | 401 NotAuthenticated |
/// | Malformed header | 401 TokenInvalid |
/// | Expired token | 401 TokenExpired |
/// | Invalid token | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes are public (they 404 on their own)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if path == "/api/auth/login" {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header).ok_or_else(|| {
            AppError::with_message(ErrorCode::TokenInvalid, "Invalid authorization header")
        })?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::with_message(ErrorCode::TokenInvalid, "Invalid token")),
            }
        }
    }
}

/// Admin middleware — requires the admin role
///
/// Checks `CurrentUser.role == "admin"`; returns 403 otherwise.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;
    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id.clone(),
            username = user.username.clone(),
            user_role = user.role.clone()
        );
        return Err(AppError::new(ErrorCode::AdminRequired));
    }

    Ok(next.run(req).await)
}
