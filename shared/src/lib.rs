//! Shared types for the Employee Management Service
//!
//! Common types used by both the server and the client crate: wire-level
//! models, the unified response envelope, and the error-code enumeration.

pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{ErrorCategory, ErrorCode};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
