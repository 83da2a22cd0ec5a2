//! `/notification` routes. Notifications are stored and listed only.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_notification;
pub use get::{get_notification, list_notifications};
pub use post::create_notification;
pub use put::update_notification;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route(
            "/{notification_id}",
            get(get_notification)
                .put(update_notification)
                .delete(delete_notification),
        )
}
