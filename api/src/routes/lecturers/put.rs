use super::common::LecturerRequest;
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error, is_unique_violation, non_empty, validation_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecturer;
use validator::Validate;

/// PUT /lecturer/{lecturer_id}
///
/// Replaces name, email and phone. Same body and validation as creation.
pub async fn update_lecturer(
    State(state): State<AppState>,
    Path(lecturer_id): Path<String>,
    Json(req): Json<LecturerRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(name), Some(email)) = (non_empty(req.name), non_empty(req.email)) else {
        return error_response(StatusCode::CONFLICT, "Name and email are required");
    };
    let phone = non_empty(req.phone);

    match lecturer::Model::update(state.db(), &lecturer_id, &name, &email, phone.as_deref()).await
    {
        Ok(Some(updated)) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Lecturer updated successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Lecturer not found for update"),
        Err(e) if is_unique_violation(&e) => error_response(
            StatusCode::CONFLICT,
            "A lecturer with this email already exists",
        ),
        Err(e) => internal_error("Error updating lecturer", e),
    }
}
