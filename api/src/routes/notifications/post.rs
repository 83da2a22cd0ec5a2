use super::common::NotificationRequest;
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, non_empty, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::notification;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

/// POST /notification
///
/// ### Request Body
/// ```json
/// { "title": "Venue change", "message": "Moved to LT 3", "courseId": "CSC101" }
/// ```
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<NotificationRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(title), Some(message)) = (non_empty(req.title), non_empty(req.message)) else {
        return error_response(StatusCode::CONFLICT, "Title and message are required");
    };
    let course_id = non_empty(req.course_id);

    let db = state.db();
    let notification_id = match next_id(db, IdPrefix::Notification).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error creating notification", e),
    };

    match notification::Model::create(
        db,
        &notification_id,
        &title,
        &message,
        course_id.as_deref(),
    )
    .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Notification created successfully")),
        )
            .into_response(),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error creating notification", e),
    }
}
