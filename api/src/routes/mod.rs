//! HTTP entry point.
//!
//! Route groups, one per controller:
//! - `/health` liveness probe
//! - `/lecturer`, `/course`, `/student`, `/group` people and courses
//! - `/assignment`, `/event`, `/notification`, `/feedback` course content
//! - `/calendar` date-window views over events and deadlines
//! - `/chat` conversations and messages
//! - `/report` dashboard and attendance aggregates
//! - `/attendance` QR attendance sessions

use crate::middleware::log_request;
use crate::state::AppState;
use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;

pub mod assignments;
pub mod attendance;
pub mod calendar;
pub mod chat;
pub mod common;
pub mod courses;
pub mod events;
pub mod feedback;
pub mod groups;
pub mod health;
pub mod lecturers;
pub mod notifications;
pub mod reports;
pub mod students;

/// Mounts every route group and binds the shared state.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/lecturer", lecturers::lecturer_routes())
        .nest("/course", courses::course_routes())
        .nest("/student", students::student_routes())
        .nest("/group", groups::group_routes())
        .nest("/assignment", assignments::assignment_routes())
        .nest("/event", events::event_routes())
        .nest("/notification", notifications::notification_routes())
        .nest("/feedback", feedback::feedback_routes())
        .nest("/calendar", calendar::calendar_routes())
        .nest("/chat", chat::chat_routes())
        .nest("/report", reports::report_routes())
        .nest("/attendance", attendance::attendance_routes())
        .with_state(app_state)
}

/// The full application: routes plus request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}
