//! API Response types
//!
//! Standardized API response structures shared by server and client

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether this response carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_roundtrip() {
        let resp = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert!(back.is_success());
        assert_eq!(back.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_error_response_skips_data() {
        let resp = ApiResponse::<()>::error("E8001", "Employee not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
        assert!(!resp.is_success());
    }
}
