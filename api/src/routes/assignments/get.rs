use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment;
use sea_orm::{EntityTrait, QueryOrder};

/// GET /assignment
///
/// Ordered by deadline, soonest first.
pub async fn list_assignments(State(state): State<AppState>) -> Response {
    match assignment::Entity::find()
        .order_by_asc(assignment::Column::Deadline)
        .all(state.db())
        .await
    {
        Ok(rows) if rows.is_empty() => {
            error_response(StatusCode::NOT_FOUND, "No assignments found")
        }
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Assignments retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error retrieving assignments", e),
    }
}

/// GET /assignment/{assignment_id}
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> Response {
    match assignment::Entity::find_by_id(assignment_id).one(state.db()).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(found, "Assignment retrieved successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Assignment not found"),
        Err(e) => internal_error("Error retrieving assignment", e),
    }
}
