use crate::routes::common::{error_response, non_empty, parse_datetime};
use axum::{http::StatusCode, response::Response};
use db::models::assignment::AssignmentFields;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<String>,
    pub deadline: Option<String>,
}

impl AssignmentRequest {
    /// Required-field check shared by create and update.
    pub fn into_fields(self) -> Result<AssignmentFields, Response> {
        let (Some(title), Some(course_id), Some(deadline)) = (
            non_empty(self.title),
            non_empty(self.course_id),
            non_empty(self.deadline),
        ) else {
            return Err(error_response(
                StatusCode::CONFLICT,
                "Title, courseId and deadline are required",
            ));
        };
        let Some(deadline) = parse_datetime(&deadline) else {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Invalid deadline. Expected an ISO 8601 date or datetime",
            ));
        };

        Ok(AssignmentFields {
            title,
            description: non_empty(self.description),
            course_id,
            deadline,
        })
    }
}
