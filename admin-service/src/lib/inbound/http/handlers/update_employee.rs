use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_employee::non_empty;
use super::create_employee::ParseEmployeeRequestError;
use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::domain::email::EmailAddress;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::inbound::http::router::AppState;

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .employee_service
        .update(id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

/// HTTP request body for a partial update (raw JSON); absent fields are left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateEmployeeRequest {
    name: Option<String>,
    email: Option<String>,
    position: Option<String>,
    active: Option<bool>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, ParseEmployeeRequestError> {
        Ok(UpdateEmployeeCommand {
            name: self.name.map(|n| non_empty(n, "name")).transpose()?,
            email: self.email.map(EmailAddress::new).transpose()?,
            position: self
                .position
                .map(|p| non_empty(p, "position"))
                .transpose()?,
            active: self.active,
        })
    }
}
