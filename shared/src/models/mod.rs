//! Wire-level models
//!
//! Serializable models exchanged between server and client.

pub mod employee;
pub mod upload;

pub use employee::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};
pub use upload::UploadedFile;
