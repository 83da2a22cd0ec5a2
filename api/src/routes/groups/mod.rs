//! `/group` routes: study groups and their members.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::{delete_group, remove_member};
pub use get::{get_group, list_groups};
pub use post::{add_member, create_group};
pub use put::update_group;

pub fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_groups).post(create_group))
        .route(
            "/{group_id}",
            get(get_group).put(update_group).delete(delete_group),
        )
        .route("/{group_id}/members", post(add_member))
        .route("/{group_id}/members/{student_id}", delete(remove_member))
}
