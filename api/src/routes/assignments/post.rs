use super::common::AssignmentRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

/// POST /assignment
///
/// ### Request Body
/// ```json
/// {
///   "title": "Lab 3",
///   "description": "Linked lists",
///   "courseId": "CSC101",
///   "deadline": "2024-06-14T23:59:00Z"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` unparseable deadline
/// - `404 Not Found` unknown course
/// - `409 Conflict` missing title, courseId or deadline
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(req): Json<AssignmentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let fields = match req.into_fields() {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    let db = state.db();
    let assignment_id = match next_id(db, IdPrefix::Assignment).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error creating assignment", e),
    };

    match assignment::Model::create(db, &assignment_id, fields).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Assignment created successfully")),
        )
            .into_response(),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error creating assignment", e),
    }
}
