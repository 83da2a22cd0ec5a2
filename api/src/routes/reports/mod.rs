//! `/report` routes: read-only aggregates.

use crate::state::AppState;
use axum::{Router, routing::get};

mod common;
mod get;

pub use get::{attendance_report, dashboard};

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/attendance", get(attendance_report))
}
