use crate::routes::common::{error_response, non_empty, parse_datetime};
use axum::{http::StatusCode, response::Response};
use db::models::event::EventFields;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type", alias = "eventType")]
    pub event_type: Option<String>,
    pub course_id: Option<String>,
}

impl EventRequest {
    pub fn into_fields(self) -> Result<EventFields, Response> {
        let (Some(title), Some(description), Some(start), Some(end), Some(location)) = (
            non_empty(self.title),
            non_empty(self.description),
            non_empty(self.start_date),
            non_empty(self.end_date),
            non_empty(self.location),
        ) else {
            return Err(error_response(
                StatusCode::CONFLICT,
                "Title, description, startDate, endDate, and location are required",
            ));
        };

        let (Some(start_date), Some(end_date)) = (parse_datetime(&start), parse_datetime(&end))
        else {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Invalid startDate or endDate. Expected an ISO 8601 date or datetime",
            ));
        };
        if end_date < start_date {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "endDate must not be earlier than startDate",
            ));
        }

        Ok(EventFields {
            title,
            description,
            start_date,
            end_date,
            location,
            event_type: non_empty(self.event_type),
            course_id: non_empty(self.course_id),
        })
    }
}
