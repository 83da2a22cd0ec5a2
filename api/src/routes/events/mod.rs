//! `/event` routes.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_event;
pub use get::{get_event, list_events};
pub use post::create_event;
pub use put::update_event;

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{event_id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}
