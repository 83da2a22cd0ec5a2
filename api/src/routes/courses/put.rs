use super::common::CourseRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, non_empty, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::course::{self, CourseFields};
use validator::Validate;

/// PUT /course/{course_id}
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(req): Json<CourseRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(course_name), Some(course_code), Some(lecturer_id)) = (
        non_empty(req.course_name),
        non_empty(req.course_code),
        non_empty(req.lecturer_id),
    ) else {
        return error_response(
            StatusCode::CONFLICT,
            "Course name, course code, and lecturer ID are required",
        );
    };

    let fields = CourseFields {
        course_name,
        course_code,
        lecturer_id,
        description: non_empty(req.description),
        credits: req.credits,
        semester: non_empty(req.semester),
    };

    match course::Model::update(state.db(), &course_id, fields).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Course updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Course not found for update"),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Lecturer not found")
        }
        Err(e) => internal_error("Error updating course", e),
    }
}
