use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error, is_foreign_key_violation};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecturer;

/// DELETE /lecturer/{lecturer_id}
///
/// Refused with `409` while the lecturer still teaches a course.
pub async fn delete_lecturer(
    State(state): State<AppState>,
    Path(lecturer_id): Path<String>,
) -> Response {
    match lecturer::Model::delete(state.db(), &lecturer_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Lecturer deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Lecturer not found"),
        Err(e) if is_foreign_key_violation(&e) => error_response(
            StatusCode::CONFLICT,
            "Lecturer is still assigned to one or more courses",
        ),
        Err(e) => internal_error("Error deleting lecturer", e),
    }
}
