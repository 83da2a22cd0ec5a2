//! `/course` routes, including student registration.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_course;
pub use get::{get_course, get_student_course, list_courses};
pub use post::{create_course, register_course};
pub use put::update_course;

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/register", post(register_course))
        .route("/student/{student_id}", get(get_student_course))
        .route(
            "/{course_id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}
