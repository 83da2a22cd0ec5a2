use super::common::EventRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::event;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

/// POST /event
///
/// ### Request Body
/// ```json
/// {
///   "title": "Mid-semester test",
///   "description": "Chapters 1-4",
///   "startDate": "2024-06-10T09:00:00Z",
///   "endDate": "2024-06-10T11:00:00Z",
///   "location": "LT 2",
///   "type": "exam",
///   "courseId": "CSC101"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` unparseable dates, or `endDate` before `startDate`
/// - `404 Not Found` unknown course
/// - `409 Conflict` a required field is missing
pub async fn create_event(State(state): State<AppState>, Json(req): Json<EventRequest>) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let fields = match req.into_fields() {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    let db = state.db();
    let event_id = match next_id(db, IdPrefix::Event).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error adding event", e),
    };

    match event::Model::create(db, &event_id, fields).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Event added successfully")),
        )
            .into_response(),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error adding event", e),
    }
}
