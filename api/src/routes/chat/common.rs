use chrono::{DateTime, Utc};
use db::models::{conversation, lecturer, message, student};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub conversation_type: Option<String>,
    pub participants: Option<Vec<String>>,
    pub course_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub conversation_id: Option<String>,
    pub sender_id: Option<String>,
    #[validate(length(max = 4000, message = "Message must be at most 4000 characters"))]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PageQuery {
    pub fn limit(&self) -> u64 {
        self.limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationCreated {
    #[serde(flatten)]
    pub conversation: conversation::Model,
    pub participants: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    #[serde(flatten)]
    pub conversation: conversation::Model,
    pub last_message: Option<String>,
    pub last_message_time: Option<DateTime<Utc>>,
    pub last_sender_id: Option<String>,
    pub last_sender_name: Option<String>,
}

impl ConversationSummary {
    /// Time of the latest message, or creation time for a silent conversation.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_message_time
            .unwrap_or(self.conversation.created_at)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    #[serde(flatten)]
    pub message: message::Model,
    pub sender_name: Option<String>,
}

/// Display names for participant ids, looked up among lecturers and then
/// students. Unknown ids are simply absent from the map.
pub async fn sender_names<C: ConnectionTrait>(
    db: &C,
    ids: &[String],
) -> Result<HashMap<String, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut names: HashMap<String, String> = lecturer::Entity::find()
        .filter(lecturer::Column::LecturerId.is_in(ids.iter().map(String::as_str)))
        .all(db)
        .await?
        .into_iter()
        .map(|l| (l.lecturer_id, l.name))
        .collect();

    let students = student::Entity::find()
        .filter(student::Column::StudentId.is_in(ids.iter().map(String::as_str)))
        .all(db)
        .await?;
    names.extend(students.into_iter().map(|s| (s.student_id, s.name)));

    Ok(names)
}

/// Trims, drops blanks and removes duplicates while keeping first-seen order.
pub fn normalize_participants(raw: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty() && seen.insert(p.clone()))
        .collect()
}
