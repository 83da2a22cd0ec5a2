use crate::routes::common::{error_response, internal_error, optional_coordinate};
use axum::{http::StatusCode, response::Response};
use chrono::{DateTime, NaiveDate, Utc};
use db::models::attendance_instance::{self, ClassType};
use serde::{Deserialize, Serialize};
use services::{attendance::InstanceSummary, error::AttendanceError, token::TokenError};

/// HTTP status for each refusal of the attendance state machine.
pub fn error_status(err: &AttendanceError) -> StatusCode {
    match err {
        AttendanceError::MissingFields(_) => StatusCode::CONFLICT,
        AttendanceError::InvalidClassType
        | AttendanceError::InvalidDate
        | AttendanceError::InvalidCode
        | AttendanceError::NoInstances => StatusCode::BAD_REQUEST,
        AttendanceError::Token(TokenError::InvalidToken) => StatusCode::UNAUTHORIZED,
        AttendanceError::Token(TokenError::ExpiredToken) => StatusCode::GONE,
        AttendanceError::Token(TokenError::MalformedPayload) => StatusCode::BAD_REQUEST,
        AttendanceError::Token(TokenError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
        AttendanceError::SessionClosed | AttendanceError::SessionExpired => StatusCode::GONE,
        AttendanceError::TokenMismatch | AttendanceError::AlreadyClosed => {
            StatusCode::UNAUTHORIZED
        }
        AttendanceError::LocationRequired(_) => StatusCode::CONFLICT,
        AttendanceError::OutOfRange { .. } => StatusCode::FORBIDDEN,
        AttendanceError::AlreadyMarked => StatusCode::CONFLICT,
        AttendanceError::Database(_) | AttendanceError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Error envelope for `err`. Server-side failures are logged and answered
/// with `context` instead of the underlying message.
pub fn attendance_error(context: &str, err: AttendanceError) -> Response {
    let status = error_status(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        return internal_error(context, err);
    }
    error_response(status, err.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    pub course_id: Option<String>,
    pub date: Option<String>,
    pub class_type: Option<String>,
    #[serde(default, deserialize_with = "optional_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "optional_coordinate")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceQuery {
    pub instance_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMarkRequest {
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "optional_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "optional_coordinate")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsQuery {
    pub date: Option<String>,
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub attendance_id: Option<String>,
    pub student_id: Option<String>,
}

/// Body of a successful `initialize`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializedResponse {
    pub attendance_instance_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub expires_at: DateTime<Utc>,
    pub class_type: ClassType,
    /// Short code encoded in the QR image.
    pub qr_code: String,
    /// `data:image/svg+xml;base64,...`; absent if rendering failed.
    pub qr_image: Option<String>,
    pub enrolled: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceResponse {
    #[serde(flatten)]
    pub instance: attendance_instance::Model,
    pub state: String,
    pub qr_code: String,
    pub present: u64,
    pub total: u64,
}

impl From<InstanceSummary> for InstanceResponse {
    fn from(summary: InstanceSummary) -> Self {
        Self {
            state: summary.state.to_string(),
            qr_code: summary.instance.display_code(),
            instance: summary.instance,
            present: summary.present,
            total: summary.total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedResponse {
    pub attendance_instance_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
