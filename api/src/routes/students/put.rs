use super::common::{StudentRequest, parse_status};
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, is_unique_violation, non_empty,
    validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::{self, StudentFields};
use validator::Validate;

/// PUT /student/{student_id}
///
/// Replaces name, email, phone and course; `status` is changed only when sent.
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(req): Json<StudentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let Ok(status) = parse_status(req.status) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid status. Must be \"active\" or \"inactive\"",
        );
    };
    let (Some(name), Some(email), Some(phone)) =
        (non_empty(req.name), non_empty(req.email), non_empty(req.phone))
    else {
        return error_response(StatusCode::CONFLICT, "Name, email, and phone are required");
    };

    let fields = StudentFields {
        name,
        email,
        phone,
        course_id: non_empty(req.course_id),
        status,
    };

    match student::Model::update(state.db(), &student_id, fields).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Student updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Student not found for update"),
        Err(e) if is_unique_violation(&e) => {
            error_response(StatusCode::CONFLICT, "Email is already in use")
        }
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error updating student", e),
    }
}
