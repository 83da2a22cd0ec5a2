use super::common::{AddMemberRequest, GroupRequest};
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
use db::models::{
    group::{self, GroupFields},
    group_member, student,
};
use sea_orm::EntityTrait;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

/// POST /group
///
/// ### Request Body
/// ```json
/// { "name": "Team A", "description": "Lab group", "courseId": "CSC101", "isGeneral": false }
/// ```
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<GroupRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let Some(name) = non_empty(req.name) else {
        return error_response(StatusCode::CONFLICT, "Group name is required");
    };

    let db = state.db();
    let group_id = match next_id(db, IdPrefix::Group).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error creating group", e),
    };

    let fields = GroupFields {
        name,
        description: non_empty(req.description),
        course_id: non_empty(req.course_id),
        is_general: req.is_general.unwrap_or(false),
    };

    match group::Model::create(db, &group_id, fields).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Group created successfully")),
        )
            .into_response(),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error creating group", e),
    }
}

/// POST /group/{group_id}/members
///
/// ### Request Body
/// ```json
/// { "studentId": "S1", "isLeader": true }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `404 Not Found` unknown group or student
/// - `409 Conflict` missing `studentId`, or already a member
pub async fn add_member(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> Response {
    let Some(student_id) = non_empty(req.student_id) else {
        return error_response(StatusCode::CONFLICT, "Student ID is required");
    };
    let db = state.db();

    match group::Entity::find_by_id(group_id.as_str()).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Group not found"),
        Err(e) => return internal_error("Error adding group member", e),
    }
    match student::Entity::find_by_id(student_id.as_str()).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => return internal_error("Error adding group member", e),
    }

    match group_member::Model::add(db, &group_id, &student_id, req.is_leader.unwrap_or(false))
        .await
    {
        Ok(member) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(member, "Member added successfully")),
        )
            .into_response(),
        Err(e) if is_unique_violation(&e) => error_response(
            StatusCode::CONFLICT,
            "Student is already a member of this group",
        ),
        Err(e) => internal_error("Error adding group member", e),
    }
}
