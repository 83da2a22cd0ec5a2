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
use sea_orm::{EntityTrait, QueryOrder};

/// GET /notification
///
/// Newest first.
pub async fn list_notifications(State(state): State<AppState>) -> Response {
    match notification::Entity::find()
        .order_by_desc(notification::Column::CreatedAt)
        .order_by_desc(notification::Column::NotificationId)
        .all(state.db())
        .await
    {
        Ok(rows) if rows.is_empty() => {
            error_response(StatusCode::NOT_FOUND, "No notifications found")
        }
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Notifications retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error retrieving notifications", e),
    }
}

/// GET /notification/{notification_id}
pub async fn get_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Response {
    match notification::Entity::find_by_id(notification_id)
        .one(state.db())
        .await
    {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(found, "Notification retrieved successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Notification not found"),
        Err(e) => internal_error("Error retrieving notification", e),
    }
}
