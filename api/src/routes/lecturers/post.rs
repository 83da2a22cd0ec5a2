use super::common::LecturerRequest;
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error, is_unique_violation, non_empty, validation_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::lecturer;
use services::id_generator::{IdPrefix, next_id};
use validator::Validate;

/// POST /lecturer
///
/// ### Request Body
/// ```json
/// { "name": "Dr. Ada Obi", "email": "ada@uni.edu", "phone": "+2348000000" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new lecturer (`lecturerId` is generated)
/// - `409 Conflict` if name or email is missing, or the email is taken
/// - `400 Bad Request` on a malformed email
pub async fn create_lecturer(
    State(state): State<AppState>,
    Json(req): Json<LecturerRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(name), Some(email)) = (non_empty(req.name), non_empty(req.email)) else {
        return error_response(StatusCode::CONFLICT, "Name and email are required");
    };
    let phone = non_empty(req.phone);

    let db = state.db();
    let lecturer_id = match next_id(db, IdPrefix::Lecturer).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error creating lecturer", e),
    };

    match lecturer::Model::create(db, &lecturer_id, &name, &email, phone.as_deref()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Lecturer created successfully")),
        )
            .into_response(),
        Err(e) if is_unique_violation(&e) => error_response(
            StatusCode::CONFLICT,
            "A lecturer with this email already exists",
        ),
        Err(e) => internal_error("Error creating lecturer", e),
    }
}
