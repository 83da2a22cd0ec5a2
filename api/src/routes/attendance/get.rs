use super::common::{
    CodeQuery, InstanceResponse, RecordsQuery, ResolvedResponse, attendance_error,
};
use crate::response::ApiResponse;
use crate::routes::common::non_empty;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use services::attendance::RecordFilter;
use services::error::AttendanceError;

/// GET /attendance
///
/// Every instance, newest first. Answers `400` when there are none.
pub async fn list_instances(State(state): State<AppState>) -> Response {
    match state.attendance().list(state.db()).await {
        Ok(instances) => (
            StatusCode::OK,
            Json(ApiResponse::success(instances, "Instances successfully retrieved")),
        )
            .into_response(),
        Err(e) => attendance_error("Error retrieving attendance instances", e),
    }
}

/// GET /attendance/instance/{instance_id}
///
/// ### Response: 200 OK
/// ```json
/// {
///   "instanceId": "ATT_INT-000001",
///   "courseId": "CSC101",
///   "date": "2024-06-01",
///   "classType": "physical",
///   "isClosed": false,
///   "state": "open",
///   "qrCode": "ATT-ATT_INT-000001",
///   "present": 12,
///   "total": 20
/// }
/// ```
pub async fn get_instance(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> Response {
    match state
        .attendance()
        .summary(state.db(), &instance_id, Utc::now())
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                InstanceResponse::from(summary),
                "Instance retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => attendance_error("Error retrieving attendance instance", e),
    }
}

/// GET /attendance/instance/{instance_id}/records
pub async fn instance_records(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> Response {
    match state
        .attendance()
        .instance_records(state.db(), &instance_id)
        .await
    {
        Ok(records) => (
            StatusCode::OK,
            Json(ApiResponse::success(records, "Attendance fetched successfully")),
        )
            .into_response(),
        Err(e) => attendance_error("Error retrieving attendance records", e),
    }
}

/// GET /attendance/resolve?code=ATT-ATT_INT-000001
///
/// Exchanges the short code shown in the QR image for the signed token
/// that `auto-mark` expects. Only open instances resolve.
pub async fn resolve_code(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Response {
    match state
        .attendance()
        .resolve_code(state.db(), query.code, Utc::now())
        .await
    {
        Ok(resolved) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ResolvedResponse {
                    attendance_instance_id: resolved.instance_id,
                    token: resolved.token,
                    expires_at: resolved.expires_at,
                },
                "Attendance code resolved successfully",
            )),
        )
            .into_response(),
        Err(e) => attendance_error("Error resolving attendance code", e),
    }
}

/// GET /attendance/records?date=2024-06-01&studentId=S1&courseId=CSC101
///
/// All filters are optional.
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Response {
    let date = match non_empty(query.date) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => return attendance_error("Error retrieving attendance records", AttendanceError::InvalidDate),
        },
    };
    let filter = RecordFilter {
        date,
        student_id: query.student_id,
        course_id: query.course_id,
    };

    match state.attendance().records(state.db(), filter).await {
        Ok(records) => (
            StatusCode::OK,
            Json(ApiResponse::success(records, "Attendance fetched successfully")),
        )
            .into_response(),
        Err(e) => attendance_error("Error retrieving attendance records", e),
    }
}
