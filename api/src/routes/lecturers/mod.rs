//! `/lecturer` routes.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_lecturer;
pub use get::{get_lecturer, list_lecturers};
pub use post::create_lecturer;
pub use put::update_lecturer;

pub fn lecturer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lecturers).post(create_lecturer))
        .route(
            "/{lecturer_id}",
            get(get_lecturer).put(update_lecturer).delete(delete_lecturer),
        )
}
