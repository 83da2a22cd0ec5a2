use super::common::{
    AutoMarkRequest, InitializeRequest, InitializedResponse, InstanceQuery, TokenQuery,
    attendance_error,
};
use crate::response::ApiResponse;
use crate::routes::common::json_body;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use services::attendance::{InitializeAttendance, MarkAttendance};
use services::qr;
use tracing::warn;

/// POST /attendance/initialize
///
/// Opens an attendance instance for a class and enrolls every active
/// student of the course as `absent`.
///
/// ### Request Body
/// ```json
/// {
///   "courseId": "CSC101",
///   "date": "2024-06-01",
///   "classType": "physical",
///   "latitude": 6.5,
///   "longitude": 3.3
/// }
/// ```
/// `latitude`/`longitude` are required for `physical` classes and ignored
/// for `online` ones. Numeric strings are accepted and blank strings count
/// as absent.
///
/// ### Response: 201 Created
/// ```json
/// {
///   "success": true,
///   "message": "Attendance initialized successfully",
///   "data": {
///     "attendanceInstanceId": "ATT_INT-000001",
///     "courseId": "CSC101",
///     "date": "2024-06-01",
///     "expiresAt": "2024-06-01T09:15:00Z",
///     "classType": "physical",
///     "qrCode": "ATT-ATT_INT-000001",
///     "qrImage": "data:image/svg+xml;base64,...",
///     "enrolled": 20
///   }
/// }
/// ```
///
/// ### Errors
/// - `400` unknown class type, malformed date or malformed body
/// - `404` unknown course
/// - `409` missing fields, or missing coordinates for a physical class
pub async fn initialize_attendance(
    State(state): State<AppState>,
    payload: Result<Json<InitializeRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };
    let request = InitializeAttendance {
        course_id: req.course_id,
        date: req.date,
        class_type: req.class_type,
        latitude: req.latitude,
        longitude: req.longitude,
    };

    let created = match state
        .attendance()
        .initialize(state.db(), request, Utc::now())
        .await
    {
        Ok(c) => c,
        Err(e) => return attendance_error("Error initializing attendance", e),
    };

    let qr_image = match qr::render_data_url(&created.display_code) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(instance_id = %created.instance.instance_id, error = %e, "QR rendering failed");
            None
        }
    };

    let body = InitializedResponse {
        attendance_instance_id: created.instance.instance_id,
        course_id: created.instance.course_id,
        date: created.instance.date,
        expires_at: created.instance.expires_at,
        class_type: created.instance.class_type,
        qr_code: created.display_code,
        qr_image,
        enrolled: created.enrolled,
    };

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(body, "Attendance initialized successfully")),
    )
        .into_response()
}

/// POST /attendance/close?instanceId=ATT_INT-000001
///
/// Closes the instance and revokes its token. Closing twice answers `401`.
pub async fn close_attendance(
    State(state): State<AppState>,
    Query(query): Query<InstanceQuery>,
) -> Response {
    match state.attendance().close(state.db(), query.instance_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Attendance successfully closed")),
        )
            .into_response(),
        Err(e) => attendance_error("Error closing attendance", e),
    }
}

/// POST /attendance/auto-mark?token=<signed token>
///
/// ### Request Body
/// ```json
/// { "studentId": "S1", "latitude": 6.5002, "longitude": 3.3001 }
/// ```
///
/// ### Errors
/// - `400` malformed token payload or malformed body
/// - `401` bad signature, or a token that is no longer the instance's
/// - `403` outside the geofence (the measured distance is in the message)
/// - `404` unknown instance or student
/// - `409` missing fields, missing coordinates, or already marked
/// - `410` expired token, or closed/expired instance
pub async fn auto_mark(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
    payload: Result<Json<AutoMarkRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(payload) {
        Ok(req) => req,
        Err(rejection) => return rejection,
    };
    let request = MarkAttendance {
        token: query.token,
        student_id: req.student_id,
        latitude: req.latitude,
        longitude: req.longitude,
    };

    match state
        .attendance()
        .mark(state.db(), request, Utc::now())
        .await
    {
        Ok(marked) => {
            let message = marked.message.clone();
            (StatusCode::OK, Json(ApiResponse::success(marked, message))).into_response()
        }
        Err(e) => attendance_error("Error marking attendance", e),
    }
}
