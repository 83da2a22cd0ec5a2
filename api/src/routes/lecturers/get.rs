use super::common::LecturerDetail;
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course, lecturer};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// GET /lecturer
///
/// All lecturers ordered by name. `404` when there are none.
pub async fn list_lecturers(State(state): State<AppState>) -> Response {
    match lecturer::Model::find_all(state.db()).await {
        Ok(rows) if rows.is_empty() => error_response(StatusCode::NOT_FOUND, "No lecturers found"),
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Lecturers retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error retrieving lecturers", e),
    }
}

/// GET /lecturer/{lecturer_id}
///
/// The lecturer plus the courses they teach.
pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(lecturer_id): Path<String>,
) -> Response {
    let db = state.db();

    let found = match lecturer::Entity::find_by_id(lecturer_id.as_str()).one(db).await {
        Ok(Some(l)) => l,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Lecturer not found"),
        Err(e) => return internal_error("Error retrieving lecturer", e),
    };

    let courses = match course::Entity::find()
        .filter(course::Column::LecturerId.eq(lecturer_id.as_str()))
        .order_by_asc(course::Column::CourseCode)
        .all(db)
        .await
    {
        Ok(c) => c,
        Err(e) => return internal_error("Error retrieving lecturer", e),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LecturerDetail {
                lecturer: found,
                courses,
            },
            "Lecturer retrieved successfully",
        )),
    )
        .into_response()
}
