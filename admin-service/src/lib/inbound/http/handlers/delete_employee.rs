use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::inbound::http::router::AppState;

/// Deletes the record and returns it in the response body.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    state
        .employee_service
        .remove(id)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
