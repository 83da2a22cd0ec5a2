use super::common::NotificationRequest;
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
use db::models::notification;
use validator::Validate;

/// PUT /notification/{notification_id}
pub async fn update_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
    Json(req): Json<NotificationRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(title), Some(message)) = (non_empty(req.title), non_empty(req.message)) else {
        return error_response(StatusCode::CONFLICT, "Title and message are required");
    };
    let course_id = non_empty(req.course_id);

    match notification::Model::update(
        state.db(),
        &notification_id,
        &title,
        &message,
        course_id.as_deref(),
    )
    .await
    {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Notification updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Notification not found for update"),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error updating notification", e),
    }
}
