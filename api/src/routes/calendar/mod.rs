//! `/calendar` routes: read-only views over events and assignment deadlines.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod get;

pub use get::{deadlines, month_events, student_schedule, upcoming_events};

pub fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(month_events))
        .route("/upcoming", get(upcoming_events))
        .route("/schedule/{student_id}", get(student_schedule))
        .route("/deadlines", get(deadlines))
}
