use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::email::EmailAddress;
use crate::domain::email::EmailError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .create(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

/// HTTP request body for creating an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    name: String,
    email: String,
    position: String,
    active: Option<bool>,
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseEmployeeRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Field must not be empty: {0}")]
    Empty(&'static str),
}

pub(super) fn non_empty(
    value: String,
    field: &'static str,
) -> Result<String, ParseEmployeeRequestError> {
    if value.trim().is_empty() {
        Err(ParseEmployeeRequestError::Empty(field))
    } else {
        Ok(value)
    }
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, ParseEmployeeRequestError> {
        Ok(CreateEmployeeCommand {
            name: non_empty(self.name, "name")?,
            email: EmailAddress::new(self.email)?,
            position: non_empty(self.position, "position")?,
            active: self.active,
        })
    }
}

impl From<ParseEmployeeRequestError> for ApiError {
    fn from(err: ParseEmployeeRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
