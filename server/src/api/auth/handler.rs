//! Authentication Handlers
//!
//! Handles login, current-user lookup and logout

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use shared::ErrorCode;
use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::activity_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token.
/// Unknown usernames and wrong passwords produce the identical failure.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let repo = UserRepository::new(state.get_db());
    let username = req.username.clone();

    let user = repo
        .find_by_username(&username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay before the verdict, whatever the outcome
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => {
            if !u.is_active {
                return Err(AppError::with_message(
                    ErrorCode::AccountDisabled,
                    "Account has been disabled",
                ));
            }

            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(username = %username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let jwt_service = state.get_jwt_service();
    let (token, expires_at) = jwt_service
        .generate_token(&user_id, &user.username, &user.display_name, &user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    activity_log!(user.username, "login");
    tracing::info!(
        user_id = %user_id,
        username = %user.username,
        role = %user.role,
        "User logged in successfully"
    );

    Ok(ok(LoginResponse {
        token,
        expires_at,
        user: user.to_user_info(),
    }))
}

/// Get current user info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AppResponse<UserInfo>>> {
    // Fetch fresh account data; is_active may have changed since login
    let repo = UserRepository::new(state.get_db());
    let fresh = repo
        .find_by_username(&user.username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let info = match fresh {
        Some(u) => u.to_user_info(),
        None => UserInfo {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            role: user.role,
            is_active: false,
        },
    };

    Ok(ok(info))
}

/// Logout handler
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<AppResponse<()>>> {
    activity_log!(user.username, "logout");
    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        "User logged out"
    );

    Ok(ok(()))
}
