use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::notification;

/// DELETE /notification/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Response {
    match notification::Model::delete(state.db(), &notification_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Notification deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Notification not found"),
        Err(e) => internal_error("Error deleting notification", e),
    }
}
