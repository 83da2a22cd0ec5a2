//! `/assignment` routes.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_assignment;
pub use get::{get_assignment, list_assignments};
pub use post::create_assignment;
pub use put::update_assignment;

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route(
            "/{assignment_id}",
            get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
}
