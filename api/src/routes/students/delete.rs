use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student;

/// DELETE /student/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    match student::Model::delete(state.db(), &student_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Student deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => internal_error("Error deleting student", e),
    }
}
