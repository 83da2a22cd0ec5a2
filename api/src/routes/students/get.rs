use super::common::{StudentDetail, StudentGroup};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, group, group_member, student};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// GET /student
///
/// Every student ordered by name. Answers `409` when there are none.
pub async fn list_students(State(state): State<AppState>) -> Response {
    match student::Model::find_all(state.db()).await {
        Ok(rows) if rows.is_empty() => error_response(StatusCode::CONFLICT, "No students found"),
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Students retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error retrieving students", e),
    }
}

/// GET /student/{student_id}
///
/// ### Response: 200 OK
/// ```json
/// {
///   "studentId": "S1",
///   "name": "Ada Obi",
///   "courseId": "CSC101",
///   "courseName": "Introduction to Computing",
///   "courseCode": "CSC 101",
///   "groups": [{ "groupId": "GRP-000001", "groupName": "Team A", "isLeader": true }]
/// }
/// ```
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let db = state.db();

    let (found, course) = match student::Entity::find_by_id(student_id.as_str())
        .find_also_related(course::Entity)
        .one(db)
        .await
    {
        Ok(Some(pair)) => pair,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => return internal_error("Error retrieving student", e),
    };

    let memberships = match group_member::Entity::find()
        .filter(group_member::Column::StudentId.eq(student_id.as_str()))
        .find_also_related(group::Entity)
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error retrieving student", e),
    };

    let groups = memberships
        .into_iter()
        .filter_map(|(member, group)| {
            group.map(|g| StudentGroup {
                group_id: g.group_id,
                group_name: g.name,
                is_leader: member.is_leader,
            })
        })
        .collect();

    let (course_name, course_code) = match course {
        Some(c) => (Some(c.course_name), Some(c.course_code)),
        None => (None, None),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            StudentDetail {
                student: found,
                course_name,
                course_code,
                groups,
            },
            "Student retrieved successfully",
        )),
    )
        .into_response()
}
