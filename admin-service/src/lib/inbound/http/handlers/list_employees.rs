use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use crate::inbound::http::router::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    state
        .employee_service
        .list()
        .await
        .map_err(ApiError::from)
        .map(|employees| {
            ApiSuccess::new(
                StatusCode::OK,
                employees.iter().map(EmployeeData::from).collect(),
            )
        })
}
