//! `/feedback` routes.
//!
//! Anonymous feedback keeps its author on record but every response goes
//! through [`feedback::Model::redacted`](db::models::feedback::Model::redacted).

use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, non_empty, validation_error,
};
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::feedback;
use sea_orm::{EntityTrait, QueryOrder};
use serde::Deserialize;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_feedback).post(create_feedback))
        .route("/{feedback_id}", get(get_feedback).delete(delete_feedback))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub student_id: Option<String>,
    #[validate(length(max = 5000, message = "Feedback must be at most 5000 characters"))]
    pub content: Option<String>,
    pub is_anonymous: Option<bool>,
}

/// POST /feedback
///
/// ### Request Body
/// ```json
/// { "studentId": "S1", "content": "Slides please", "isAnonymous": true }
/// ```
///
/// `studentId` may be omitted only when `isAnonymous` is `true`.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let Some(content) = non_empty(req.content) else {
        return error_response(StatusCode::CONFLICT, "Feedback content is required");
    };
    let is_anonymous = req.is_anonymous.unwrap_or(false);
    let student_id = non_empty(req.student_id);
    if student_id.is_none() && !is_anonymous {
        return error_response(
            StatusCode::CONFLICT,
            "studentId is required unless the feedback is anonymous",
        );
    }

    let db = state.db();
    let feedback_id = match next_id(db, IdPrefix::Feedback).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error submitting feedback", e),
    };

    match feedback::Model::create(db, &feedback_id, student_id.as_deref(), &content, is_anonymous)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                created.redacted(),
                "Feedback submitted successfully",
            )),
        )
            .into_response(),
        Err(e) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Student not found")
        }
        Err(e) => internal_error("Error submitting feedback", e),
    }
}

/// GET /feedback
pub async fn list_feedback(State(state): State<AppState>) -> Response {
    match feedback::Entity::find()
        .order_by_desc(feedback::Column::CreatedAt)
        .order_by_desc(feedback::Column::FeedbackId)
        .all(state.db())
        .await
    {
        Ok(rows) if rows.is_empty() => error_response(StatusCode::NOT_FOUND, "No feedback found"),
        Ok(rows) => {
            let rows: Vec<_> = rows.into_iter().map(feedback::Model::redacted).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(rows, "Feedback retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error retrieving feedback", e),
    }
}

/// GET /feedback/{feedback_id}
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<String>,
) -> Response {
    match feedback::Entity::find_by_id(feedback_id).one(state.db()).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                found.redacted(),
                "Feedback retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Feedback not found"),
        Err(e) => internal_error("Error retrieving feedback", e),
    }
}

/// DELETE /feedback/{feedback_id}
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<String>,
) -> Response {
    match feedback::Model::delete(state.db(), &feedback_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Feedback deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Feedback not found"),
        Err(e) => internal_error("Error deleting feedback", e),
    }
}
