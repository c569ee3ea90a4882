//! `/api/employees` handlers.
//!
//! Every outcome the service can report is a 200: a missing record is a
//! `null` body for get/update and `false` for delete.
use axum::{extract::{Path, State}, Json};
use models::employee::{self, EmployeeInput};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc]),
        (status = 500, description = "Database Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<employee::Model>>, JsonApiError> {
    Ok(Json(state.employees.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "The employee, or null when absent", body = crate::openapi::EmployeeDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Option<employee::Model>>, JsonApiError> {
    Ok(Json(state.employees.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Created employee with its assigned id", body = crate::openapi::EmployeeDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<EmployeeInput>) -> Result<Json<employee::Model>, JsonApiError> {
    Ok(Json(state.employees.create(input).await?))
}

#[utoipa::path(
    put, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated employee, or null when absent", body = crate::openapi::EmployeeDoc),
        (status = 500, description = "Database Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Option<employee::Model>>, JsonApiError> {
    Ok(Json(state.employees.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "true if removed, false if absent", body = bool),
        (status = 500, description = "Database Error")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<bool>, JsonApiError> {
    Ok(Json(state.employees.delete(id).await?))
}
