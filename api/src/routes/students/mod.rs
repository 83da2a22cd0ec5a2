//! `/student` routes.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_student;
pub use get::{get_student, list_students};
pub use post::register_student;
pub use put::update_student;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(register_student))
        .route(
            "/{student_id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
