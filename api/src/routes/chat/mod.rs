//! `/chat` routes: conversations between students and lecturers.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

mod common;
mod get;
mod post;

pub use get::{course_chat, list_conversations, list_messages};
pub use post::{create_conversation, send_message};

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations", post(create_conversation))
        .route("/conversations/{user_id}", get(list_conversations))
        .route("/messages", post(send_message))
        .route("/messages/{conversation_id}", get(list_messages))
        .route("/course-chat/{course_id}", get(course_chat))
}
