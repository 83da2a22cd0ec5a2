use super::common::attendance_error;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// DELETE /attendance/instance/{instance_id}
///
/// Removes the instance and all of its records.
pub async fn delete_instance(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> Response {
    match state
        .attendance()
        .delete_instance(state.db(), &instance_id)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Instance deleted successfully")),
        )
            .into_response(),
        Err(e) => attendance_error("Error deleting attendance instance", e),
    }
}

/// DELETE /attendance/records/{attendance_id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(attendance_id): Path<String>,
) -> Response {
    match state
        .attendance()
        .delete_record(state.db(), &attendance_id)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Attendance deleted successfully")),
        )
            .into_response(),
        Err(e) => attendance_error("Error deleting attendance", e),
    }
}
