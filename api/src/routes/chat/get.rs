use super::common::{ConversationSummary, MessageView, PageQuery, sender_names};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{
    conversation::{self, ConversationType},
    conversation_participant, course, message,
};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use services::id_generator::{IdPrefix, next_id};

/// GET /chat/conversations/{user_id}
///
/// Conversations the user takes part in, each with its latest message,
/// most recently active first.
pub async fn list_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let db = state.db();

    let conversations = match conversation::Entity::find()
        .inner_join(conversation_participant::Entity)
        .filter(conversation_participant::Column::ParticipantId.eq(user_id.as_str()))
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error fetching conversations", e),
    };

    let mut latest = Vec::with_capacity(conversations.len());
    for c in &conversations {
        match message::Model::latest(db, &c.conversation_id).await {
            Ok(m) => latest.push(m),
            Err(e) => return internal_error("Error fetching conversations", e),
        }
    }

    let senders: Vec<String> = latest
        .iter()
        .flatten()
        .map(|m| m.sender_id.clone())
        .collect();
    let names = match sender_names(db, &senders).await {
        Ok(n) => n,
        Err(e) => return internal_error("Error fetching conversations", e),
    };

    let mut summaries: Vec<ConversationSummary> = conversations
        .into_iter()
        .zip(latest)
        .map(|(conversation, last)| ConversationSummary {
            conversation,
            last_sender_name: last
                .as_ref()
                .and_then(|m| names.get(&m.sender_id).cloned()),
            last_message_time: last.as_ref().map(|m| m.created_at),
            last_sender_id: last.as_ref().map(|m| m.sender_id.clone()),
            last_message: last.map(|m| m.content),
        })
        .collect();
    summaries.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            summaries,
            "Conversations retrieved successfully",
        )),
    )
        .into_response()
}

/// GET /chat/messages/{conversation_id}?limit=50&offset=0
///
/// A page of the most recent messages, returned oldest first so it can be
/// rendered top to bottom. `offset` counts back from the newest message.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Response {
    let db = state.db();

    match conversation::Entity::find_by_id(conversation_id.as_str()).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Conversation not found"),
        Err(e) => return internal_error("Error fetching messages", e),
    }

    let mut messages = match message::Entity::find()
        .filter(message::Column::ConversationId.eq(conversation_id.as_str()))
        .order_by_desc(message::Column::CreatedAt)
        .order_by_desc(message::Column::MessageId)
        .limit(page.limit())
        .offset(page.offset())
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error fetching messages", e),
    };
    messages.reverse();

    let senders: Vec<String> = messages.iter().map(|m| m.sender_id.clone()).collect();
    let names = match sender_names(db, &senders).await {
        Ok(n) => n,
        Err(e) => return internal_error("Error fetching messages", e),
    };

    let items: Vec<MessageView> = messages
        .into_iter()
        .map(|message| MessageView {
            sender_name: names.get(&message.sender_id).cloned(),
            message,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(items, "Messages retrieved successfully")),
    )
        .into_response()
}

/// GET /chat/course-chat/{course_id}
///
/// Returns the course's group conversation, creating it (titled after the
/// course) on first use.
///
/// ### Responses
/// - `200 OK` existing conversation
/// - `201 Created` conversation created by this call
/// - `404 Not Found` unknown course
pub async fn course_chat(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Response {
    let result = state
        .db()
        .transaction::<_, Option<(conversation::Model, bool)>, DbErr>(|txn| {
            Box::pin(async move {
                if let Some(existing) = conversation::Model::find_for_course(txn, &course_id).await? {
                    return Ok(Some((existing, false)));
                }
                let Some(found) = course::Entity::find_by_id(course_id.as_str()).one(txn).await?
                else {
                    return Ok(None);
                };
                let conversation_id = next_id(txn, IdPrefix::Conversation).await?;
                let created = conversation::Model::create(
                    txn,
                    &conversation_id,
                    &found.course_name,
                    ConversationType::Course,
                    Some(found.course_id.as_str()),
                )
                .await?;
                Ok(Some((created, true)))
            })
        })
        .await;

    match result {
        Ok(Some((conversation, false))) => (
            StatusCode::OK,
            Json(ApiResponse::success(conversation, "Course chat retrieved successfully")),
        )
            .into_response(),
        Ok(Some((conversation, true))) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(conversation, "Course chat created successfully")),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Course not found"),
        Err(e) => internal_error("Error getting course chat", e),
    }
}
