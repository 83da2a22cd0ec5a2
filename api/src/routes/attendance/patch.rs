use super::common::{StatusQuery, attendance_error};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// PATCH /attendance/records/status?attendanceId=ATT-000004&studentId=S1
///
/// Marks the record present on a course rep's say-so. Answers `202` with
/// the record, including when it was already present.
pub async fn mark_manually(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Response {
    match state
        .attendance()
        .mark_manually(
            state.db(),
            query.attendance_id,
            query.student_id,
            Utc::now(),
        )
        .await
    {
        Ok(record) => (
            StatusCode::ACCEPTED,
            Json(ApiResponse::success(record, "Attendance successfully marked")),
        )
            .into_response(),
        Err(e) => attendance_error("Error updating attendance", e),
    }
}
