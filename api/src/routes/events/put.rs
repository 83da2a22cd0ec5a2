use super::common::EventRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::event;
use validator::Validate;

/// PUT /event/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(req): Json<EventRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let fields = match req.into_fields() {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match event::Model::update(state.db(), &event_id, fields).await {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Event updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Event not found for update"),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error updating event", e),
    }
}
