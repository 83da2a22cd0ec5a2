use super::common::GroupRequest;
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
use db::models::group::{self, GroupFields};
use validator::Validate;

/// PUT /group/{group_id}
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(req): Json<GroupRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let Some(name) = non_empty(req.name) else {
        return error_response(StatusCode::CONFLICT, "Group name is required");
    };

    let fields = GroupFields {
        name,
        description: non_empty(req.description),
        course_id: non_empty(req.course_id),
        is_general: req.is_general.unwrap_or(false),
    };

    match group::Model::update(state.db(), &group_id, fields).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Group updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Group not found for update"),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error updating group", e),
    }
}
