//! Employee Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Employee response (server-assigned id as "employee:key" string)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub department_name: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Stored filename of the profile image, if one was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "department_name must not be empty"))]
    pub department_name: String,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(email(message = "invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            r#""Active""#
        );
        assert_eq!(
            serde_json::from_str::<EmployeeStatus>(r#""Inactive""#).unwrap(),
            EmployeeStatus::Inactive
        );
    }

    #[test]
    fn test_create_payload_validation() {
        let payload = EmployeeCreate {
            name: "Maria Santos".into(),
            email: "not-an-email".into(),
            phone: None,
            department_name: "Accounting".into(),
            position: "Clerk".into(),
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            salary: Decimal::new(2500000, 2),
            status: EmployeeStatus::Active,
            profile_image: None,
        };
        assert!(validator::Validate::validate(&payload).is_err());
    }
}
