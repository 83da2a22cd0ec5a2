use chrono::{DateTime, Utc};
use db::models::group;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    #[validate(length(max = 120, message = "Group name must be at most 120 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<String>,
    pub is_general: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub student_id: Option<String>,
    pub is_leader: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListItem {
    #[serde(flatten)]
    pub group: group::Model,
    pub member_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberView {
    pub student_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_leader: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    #[serde(flatten)]
    pub group: group::Model,
    pub members: Vec<GroupMemberView>,
}
