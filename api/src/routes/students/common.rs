use db::models::student::{self, StudentStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    /// Only read on registration.
    pub student_id: Option<String>,
    pub name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Only read on registration.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub course_id: Option<String>,
    pub status: Option<String>,
}

/// `Ok(None)` when no status was sent; `Err` carries the rejected value.
pub fn parse_status(raw: Option<String>) -> Result<Option<StudentStatus>, String> {
    match raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s.parse().map(Some).map_err(|_| s),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGroup {
    pub group_id: String,
    pub group_name: String,
    pub is_leader: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: student::Model,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub groups: Vec<StudentGroup>,
}
