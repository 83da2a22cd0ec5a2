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

/// DELETE /event/{event_id}
pub async fn delete_event(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    match event::Model::delete(state.db(), &event_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Event deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Event not found"),
        Err(e) => internal_error("Error deleting event", e),
    }
}
