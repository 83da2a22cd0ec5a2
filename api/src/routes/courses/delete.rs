use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course;

/// DELETE /course/{course_id}
///
/// Enrolled students keep their rows with `courseId` cleared; the course's
/// assignments and attendance instances go with it.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Response {
    match course::Model::delete(state.db(), &course_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Course deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => internal_error("Error deleting course", e),
    }
}
