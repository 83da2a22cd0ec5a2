use super::common::{CourseRequest, RegisterCourseRequest};
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
use db::models::{
    course::{self, CourseFields},
    student,
};
use sea_orm::{EntityTrait, prelude::Expr, ColumnTrait, QueryFilter};
use validator::Validate;

/// POST /course
///
/// ### Request Body
/// ```json
/// {
///   "courseId": "CSC101",
///   "courseName": "Introduction to Computing",
///   "courseCode": "CSC 101",
///   "lecturerId": "LEC-000001",
///   "credits": 3,
///   "semester": "Fall 2024"
/// }
/// ```
///
/// `credits` defaults to 3 and `semester` to `Fall 2024`.
///
/// ### Responses
/// - `201 Created`
/// - `409 Conflict` missing required field, or the course id already exists
/// - `404 Not Found` unknown lecturer
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CourseRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(course_id), Some(course_name), Some(course_code), Some(lecturer_id)) = (
        non_empty(req.course_id),
        non_empty(req.course_name),
        non_empty(req.course_code),
        non_empty(req.lecturer_id),
    ) else {
        return error_response(
            StatusCode::CONFLICT,
            "Course ID, course name, course code, and lecturer ID are required",
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

    match course::Model::create(state.db(), &course_id, fields).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Course added successfully")),
        )
            .into_response(),
        Err(e) if is_unique_violation(&e) => {
            error_response(StatusCode::CONFLICT, "Course already exists")
        }
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Lecturer not found")
        }
        Err(e) => internal_error("Error adding course", e),
    }
}

/// POST /course/register
///
/// Enrolls a student in a course by setting the student's `courseId`.
///
/// ### Request Body
/// ```json
/// { "courseId": "CSC101", "studentId": "S1" }
/// ```
///
/// ### Responses
/// - `201 Created` "Course registered successfully"
/// - `409 Conflict` missing ids, or already registered for this course
/// - `404 Not Found` unknown student or course
pub async fn register_course(
    State(state): State<AppState>,
    Json(req): Json<RegisterCourseRequest>,
) -> Response {
    let (Some(course_id), Some(student_id)) = (non_empty(req.course_id), non_empty(req.student_id))
    else {
        return error_response(
            StatusCode::CONFLICT,
            "Course ID and student ID required to register course",
        );
    };
    let db = state.db();

    let found = match student::Entity::find_by_id(student_id.as_str()).one(db).await {
        Ok(Some(s)) => s,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => return internal_error("Error registering course", e),
    };
    if found.course_id.as_deref() == Some(course_id.as_str()) {
        return error_response(
            StatusCode::CONFLICT,
            "Student already registered for this course",
        );
    }

    match course::Entity::find_by_id(course_id.as_str()).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => return internal_error("Error registering course", e),
    }

    let res = student::Entity::update_many()
        .col_expr(student::Column::CourseId, Expr::value(course_id.as_str()))
        .filter(student::Column::StudentId.eq(student_id.as_str()))
        .exec(db)
        .await;

    match res {
        Ok(_) => (
            StatusCode::CREATED,
            Json(ApiResponse::<()>::success((), "Course registered successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error registering course", e),
    }
}
