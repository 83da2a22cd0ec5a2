use super::common::AssignmentRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment;
use validator::Validate;

/// PUT /assignment/{assignment_id}
///
/// Same body and required fields as create.
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
    Json(req): Json<AssignmentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let fields = match req.into_fields() {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match assignment::Model::update(state.db(), &assignment_id, fields).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Assignment updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Assignment not found for update"),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error updating assignment", e),
    }
}
