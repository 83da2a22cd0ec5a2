use super::common::{StudentRequest, parse_status};
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, is_unique_violation, non_empty,
    validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::{self, StudentFields};
use services::password::hash_password;
use validator::Validate;

/// POST /student
///
/// Registers a student. The password is stored as an Argon2 hash and never
/// returned.
///
/// ### Request Body
/// ```json
/// {
///   "studentId": "S1",
///   "name": "Ada Obi",
///   "email": "ada@uni.edu",
///   "phone": "08000000000",
///   "password": "secret123",
///   "courseId": "CSC101"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `409 Conflict` missing field, or the id/email is taken
/// - `400 Bad Request` invalid email, short password or unknown status
/// - `404 Not Found` unknown course
pub async fn register_student(
    State(state): State<AppState>,
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
    let (Some(student_id), Some(name), Some(email), Some(phone), Some(password)) = (
        non_empty(req.student_id),
        non_empty(req.name),
        non_empty(req.email),
        non_empty(req.phone),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return error_response(
            StatusCode::CONFLICT,
            "Student ID, name, email, phone, and password are required",
        );
    };

    let password_hash = match hash_password(&password) {
        Ok(h) => h,
        Err(e) => return internal_error("Error registering student", e),
    };

    let fields = StudentFields {
        name,
        email,
        phone,
        course_id: non_empty(req.course_id),
        status,
    };

    match student::Model::create(state.db(), &student_id, fields, &password_hash).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Student registered successfully")),
        )
            .into_response(),
        Err(e) if is_unique_violation(&e) => {
            error_response(StatusCode::CONFLICT, "Student already exists")
        }
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error registering student", e),
    }
}
