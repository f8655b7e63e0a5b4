//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Employee;
use shared::models::{EmployeeCreate, EmployeeUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse an "employee:key" id string, rejecting foreign tables
    fn thing(id: &str) -> RepoResult<RecordId> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if thing.table() != TABLE {
            return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
        }
        Ok(thing)
    }

    /// List employees, optionally filtered by a search term
    ///
    /// The term is matched case-insensitively as a substring of name,
    /// email or department_name. Results are ordered by name.
    pub async fn search(&self, term: Option<&str>) -> RepoResult<Vec<Employee>> {
        let term = term.map(str::trim).filter(|t| !t.is_empty());

        let employees: Vec<Employee> = match term {
            Some(q) => {
                self.base
                    .db()
                    .query(
                        r#"SELECT * FROM employee
                        WHERE string::lowercase(name) CONTAINS $q
                            OR string::lowercase(email) CONTAINS $q
                            OR string::lowercase(department_name) CONTAINS $q
                        ORDER BY name"#,
                    )
                    .bind(("q", q.to_lowercase()))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM employee ORDER BY name")
                    .await?
                    .take(0)?
            }
        };
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = Self::thing(id)?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // Check duplicate email
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                data.email
            )));
        }

        let mut result = self
            .base
            .db()
            .query("CREATE employee CONTENT $data RETURN AFTER")
            .bind(("data", data))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee; only the provided fields change
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = Self::thing(id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate email if changing
        if let Some(ref new_email) = data.email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                new_email
            )));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete an employee
    ///
    /// A second delete of the same id reports NotFound, never success.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = Self::thing(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shared::models::EmployeeStatus;

    fn payload(name: &str, email: &str, department: &str) -> EmployeeCreate {
        EmployeeCreate {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            department_name: department.to_string(),
            position: "Clerk".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            salary: Decimal::new(2500000, 2),
            status: EmployeeStatus::Active,
            profile_image: None,
        }
    }

    async fn repo() -> EmployeeRepository {
        let service = DbService::in_memory().await.unwrap();
        EmployeeRepository::new(service.db)
    }

    #[tokio::test]
    async fn test_search_matches_lowercase_query_against_uppercase_data() {
        let repo = repo().await;
        repo.create(payload("Alan Reyes", "alan@example.com", "ACCT Payable"))
            .await
            .unwrap();
        repo.create(payload("Bea Cruz", "bea@example.com", "Engineering"))
            .await
            .unwrap();

        let hits = repo.search(Some("acct")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alan Reyes");
    }

    #[tokio::test]
    async fn test_search_matches_uppercase_query_against_lowercase_data() {
        let repo = repo().await;
        repo.create(payload("Alan Reyes", "alan@example.com", "acct payable"))
            .await
            .unwrap();
        repo.create(payload("Bea Cruz", "bea@example.com", "Engineering"))
            .await
            .unwrap();

        let hits = repo.search(Some("ACCT")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alan Reyes");
    }

    #[tokio::test]
    async fn test_search_matches_email_substring() {
        let repo = repo().await;
        repo.create(payload("Alan Reyes", "acct.clerk@example.com", "Finance"))
            .await
            .unwrap();
        repo.create(payload("Bea Cruz", "bea@example.com", "Finance"))
            .await
            .unwrap();

        let hits = repo.search(Some("acct")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "acct.clerk@example.com");
    }

    #[tokio::test]
    async fn test_empty_search_lists_all_ordered_by_name() {
        let repo = repo().await;
        repo.create(payload("Zeno Diaz", "zeno@example.com", "Sales"))
            .await
            .unwrap();
        repo.create(payload("Alan Reyes", "alan@example.com", "Sales"))
            .await
            .unwrap();

        let all = repo.search(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Alan Reyes");
        assert_eq!(all[1].name, "Zeno Diaz");

        // Blank terms behave like no filter
        let blank = repo.search(Some("   ")).await.unwrap();
        assert_eq!(blank.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = repo().await;
        let created = repo
            .create(payload("Alan Reyes", "alan@example.com", "Sales"))
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        assert!(repo.delete(&id).await.unwrap());
        match repo.delete(&id).await {
            Err(RepoError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_rejects_foreign_table_id() {
        let repo = repo().await;
        match repo.delete("user:admin").await {
            Err(RepoError::Validation(_)) => {}
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_email_rejected() {
        let repo = repo().await;
        repo.create(payload("Alan Reyes", "alan@example.com", "Sales"))
            .await
            .unwrap();
        match repo
            .create(payload("Alan Clone", "alan@example.com", "Sales"))
            .await
        {
            Err(RepoError::Duplicate(_)) => {}
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let repo = repo().await;
        let created = repo
            .create(payload("Alan Reyes", "alan@example.com", "Sales"))
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = repo
            .update(
                &id,
                EmployeeUpdate {
                    position: Some("Manager".to_string()),
                    status: Some(EmployeeStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.position, "Manager");
        assert_eq!(updated.status, EmployeeStatus::Inactive);
        assert_eq!(updated.name, "Alan Reyes");
        assert_eq!(updated.email, "alan@example.com");
    }
}
