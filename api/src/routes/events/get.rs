use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::event;
use sea_orm::{EntityTrait, QueryOrder};

/// GET /event
///
/// Latest start date first.
pub async fn list_events(State(state): State<AppState>) -> Response {
    match event::Entity::find()
        .order_by_desc(event::Column::StartDate)
        .all(state.db())
        .await
    {
        Ok(rows) if rows.is_empty() => error_response(StatusCode::NOT_FOUND, "No Events found"),
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Events retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error retrieving events", e),
    }
}

/// GET /event/{event_id}
pub async fn get_event(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match event::Entity::find_by_id(event_id).one(state.db()).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(found, "Event retrieved successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Event not found"),
        Err(e) => internal_error("Error retrieving event", e),
    }
}
