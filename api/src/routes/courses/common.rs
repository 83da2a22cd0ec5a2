use db::models::{course, lecturer};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    /// Ignored on update; the path id wins.
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub lecturer_id: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 30, message = "Credits must be between 1 and 30"))]
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCourseRequest {
    pub course_id: Option<String>,
    pub student_id: Option<String>,
}

/// A course joined with its lecturer's contact details.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListItem {
    #[serde(flatten)]
    pub course: course::Model,
    pub lecturer_name: Option<String>,
    pub lecturer_email: Option<String>,
}

impl From<(course::Model, Option<lecturer::Model>)> for CourseListItem {
    fn from((course, lecturer): (course::Model, Option<lecturer::Model>)) -> Self {
        let (lecturer_name, lecturer_email) = match lecturer {
            Some(l) => (Some(l.name), Some(l.email)),
            None => (None, None),
        };
        Self {
            course,
            lecturer_name,
            lecturer_email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: course::Model,
    pub lecturer: Option<lecturer::Model>,
    pub total_students: u64,
}
