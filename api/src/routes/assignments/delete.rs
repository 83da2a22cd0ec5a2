use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment;

/// DELETE /assignment/{assignment_id}
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> Response {
    match assignment::Model::delete(state.db(), &assignment_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Assignment deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Assignment not found"),
        Err(e) => internal_error("Error deleting assignment", e),
    }
}
