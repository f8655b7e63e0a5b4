//! Employee row model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::EmployeeStatus;
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee row matching the database table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing)]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub department_name: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl Employee {
    /// Wire-level representation with the record id rendered as a string
    pub fn to_wire(&self) -> shared::models::Employee {
        shared::models::Employee {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department_name: self.department_name.clone(),
            position: self.position.clone(),
            hire_date: self.hire_date,
            salary: self.salary,
            status: self.status,
            profile_image: self.profile_image.clone(),
        }
    }
}
