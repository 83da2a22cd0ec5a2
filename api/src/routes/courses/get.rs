use super::common::{CourseDetail, CourseListItem};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, lecturer, student};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

/// GET /course
///
/// Every course with its lecturer's name and email, ordered by code.
pub async fn list_courses(State(state): State<AppState>) -> Response {
    let rows = course::Entity::find()
        .find_also_related(lecturer::Entity)
        .order_by_asc(course::Column::CourseCode)
        .all(state.db())
        .await;

    match rows {
        Ok(rows) if rows.is_empty() => error_response(StatusCode::NOT_FOUND, "No courses found"),
        Ok(rows) => {
            let items: Vec<CourseListItem> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Courses retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error retrieving courses", e),
    }
}

/// GET /course/{course_id}
///
/// The course, its lecturer, and how many students are enrolled.
pub async fn get_course(State(state): State<AppState>, Path(course_id): Path<String>) -> Response {
    let db = state.db();

    let (found, lecturer) = match course::Entity::find_by_id(course_id.as_str())
        .find_also_related(lecturer::Entity)
        .one(db)
        .await
    {
        Ok(Some(pair)) => pair,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => return internal_error("Error retrieving course", e),
    };

    let total_students = match student::Entity::find()
        .filter(student::Column::CourseId.eq(course_id.as_str()))
        .count(db)
        .await
    {
        Ok(n) => n,
        Err(e) => return internal_error("Error retrieving course", e),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            CourseDetail {
                course: found,
                lecturer,
                total_students,
            },
            "Course retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /course/student/{student_id}
///
/// The course the student is registered for, as a one-element list.
pub async fn get_student_course(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let db = state.db();

    let course_id = match student::Entity::find_by_id(student_id.as_str()).one(db).await {
        Ok(Some(student::Model {
            course_id: Some(course_id),
            ..
        })) => course_id,
        Ok(Some(_)) => {
            return error_response(StatusCode::NOT_FOUND, "No courses found for this student");
        }
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => return internal_error("Error retrieving courses for student", e),
    };

    match course::Entity::find_by_id(course_id.as_str())
        .find_also_related(lecturer::Entity)
        .all(db)
        .await
    {
        Ok(rows) if rows.is_empty() => {
            error_response(StatusCode::NOT_FOUND, "No courses found for this student")
        }
        Ok(rows) => {
            let items: Vec<CourseListItem> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Courses retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error retrieving courses for student", e),
    }
}
