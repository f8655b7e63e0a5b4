//! Typed client for the Employee Management Service
//!
//! Wraps the HTTP API behind typed methods. Authentication state lives in
//! an explicit [`Session`] object that callers pass to every call; each
//! call checks the session's expiry before touching the network.
//!
//! ```no_run
//! use ems_client::{ClientConfig, EmsClient};
//!
//! # async fn demo() -> Result<(), ems_client::ClientError> {
//! let client = EmsClient::new(&ClientConfig::default());
//! let session = client.login("admin", "secret").await?;
//! let employees = client.list_employees(&session, Some("acct")).await?;
//! println!("{} matches", employees.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::EmsClient;
pub use session::Session;

// Re-export the wire types callers see
pub use shared::ApiResponse;
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::models::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate, UploadedFile};
