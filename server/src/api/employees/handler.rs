//! Employee API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::activity_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// Query string for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Search term matched against name, email and department
    pub q: Option<String>,
}

/// List employees, optionally filtered by `?q=`
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AppResponse<Vec<Employee>>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.search(query.q.as_deref()).await?;
    Ok(ok(employees.iter().map(|e| e.to_wire()).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(ok(employee.to_wire()))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<AppResponse<Employee>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(payload).await?.to_wire();

    activity_log!(user.username, "create_employee", employee = employee.id.clone());

    Ok(ok(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<AppResponse<Employee>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.update(&id, payload).await?;

    activity_log!(user.username, "update_employee", employee = id);

    Ok(ok(employee.to_wire()))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let result = repo.delete(&id).await?;

    activity_log!(user.username, "delete_employee", employee = id);

    Ok(ok(result))
}
