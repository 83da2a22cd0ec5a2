use super::common::{
    ConversationCreated, CreateConversationRequest, MessageView, SendMessageRequest,
    normalize_participants, sender_names,
};
use crate::response::ApiResponse;
use crate::routes::common::{
    error_response, internal_error, is_foreign_key_violation, non_empty, validation_error,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{
    conversation::{self, ConversationType},
    conversation_participant, message,
};
use sea_orm::{DbErr, EntityTrait, TransactionError, TransactionTrait};
use services::id_generator::{IdPrefix, next_id};
use std::str::FromStr;
use validator::Validate;

/// POST /chat/conversations
///
/// ### Request Body
/// ```json
/// { "title": "Lab partners", "type": "group", "participants": ["S1", "S2"] }
/// ```
///
/// The conversation and its participants are written in one transaction.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` missing title, type or participants, or unknown type
/// - `404 Not Found` unknown `courseId`
pub async fn create_conversation(
    State(state): State<AppState>,
    Json(req): Json<CreateConversationRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let participants = normalize_participants(req.participants.unwrap_or_default());
    let (Some(title), Some(kind)) = (non_empty(req.title), non_empty(req.conversation_type))
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };
    if participants.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    }
    let Ok(kind) = ConversationType::from_str(&kind.to_lowercase()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid conversation type. Must be \"direct\", \"group\" or \"course\"",
        );
    };
    let course_id = non_empty(req.course_id);

    let result = state
        .db()
        .transaction::<_, ConversationCreated, DbErr>(|txn| {
            Box::pin(async move {
                let conversation_id = next_id(txn, IdPrefix::Conversation).await?;
                let created = conversation::Model::create(
                    txn,
                    &conversation_id,
                    &title,
                    kind,
                    course_id.as_deref(),
                )
                .await?;
                for participant in &participants {
                    conversation_participant::Model::add(txn, &conversation_id, participant)
                        .await?;
                }
                Ok(ConversationCreated {
                    conversation: created,
                    participants,
                })
            })
        })
        .await;

    match result {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Conversation created successfully")),
        )
            .into_response(),
        Err(TransactionError::Transaction(e)) if is_foreign_key_violation(&e) => {
            error_response(StatusCode::NOT_FOUND, "Course not found")
        }
        Err(e) => internal_error("Error creating conversation", e),
    }
}

/// POST /chat/messages
///
/// ### Request Body
/// ```json
/// { "conversationId": "CNV-000001", "senderId": "S1", "content": "Hello" }
/// ```
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    let (Some(conversation_id), Some(sender_id), Some(content)) = (
        non_empty(req.conversation_id),
        non_empty(req.sender_id),
        non_empty(req.content),
    ) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let db = state.db();
    match conversation::Entity::find_by_id(conversation_id.as_str()).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Conversation not found"),
        Err(e) => return internal_error("Error sending message", e),
    }

    let message_id = match next_id(db, IdPrefix::Message).await {
        Ok(id) => id,
        Err(e) => return internal_error("Error sending message", e),
    };
    let sent = match message::Model::create(db, &message_id, &conversation_id, &sender_id, &content)
        .await
    {
        Ok(m) => m,
        Err(e) => return internal_error("Error sending message", e),
    };

    let sender_name = match sender_names(db, std::slice::from_ref(&sent.sender_id)).await {
        Ok(mut names) => names.remove(&sent.sender_id),
        Err(e) => return internal_error("Error sending message", e),
    };

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            MessageView {
                message: sent,
                sender_name,
            },
            "Message sent successfully",
        )),
    )
        .into_response()
}
