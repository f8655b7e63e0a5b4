//! Employee Management Service — HTTP API server
//!
//! # Architecture
//!
//! - **Auth** (`auth`): JWT bearer tokens + Argon2 password hashing
//! - **Database** (`db`): embedded SurrealDB storage with a repository layer
//! - **Storage** (`storage`): upload persistence behind a storage trait
//! - **HTTP API** (`api`): RESTful routes for auth, employees, uploads
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # Config, state, server bootstrap
//! ├── auth/          # JWT service, auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Models and repositories
//! ├── storage/       # Upload storage abstraction
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod storage;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, setup_environment};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

// Activity logging macro - one line per user-visible action
#[macro_export]
macro_rules! activity_log {
    ($user:expr, $action:expr) => {
        tracing::info!(target: "activity", user = %$user, action = %$action);
    };
    ($user:expr, $action:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(target: "activity", user = %$user, action = %$action, $($key = $value),*);
    };
}

pub fn print_banner() {
    println!(
        r#"
    ________  ___ _____
   / ____/  |/  / ___/
  / __/ / /|_/ /\__ \
 / /___/ /  / /___/ /
/_____/_/  /_//____/
    "#
    );
}
