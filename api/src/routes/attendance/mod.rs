//! `/attendance` routes: the QR attendance flow.
//!
//! A course rep initializes an instance for a class, shows its QR code,
//! and students scan it. The scanned display code resolves to the signed
//! token, which `auto-mark` verifies together with the student's location.
//! Every state transition lives in [`services::attendance`]; these handlers
//! only parse input and map
//! [`AttendanceError`](services::error::AttendanceError) to HTTP statuses.

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

mod common;
mod delete;
mod get;
mod patch;
mod post;

pub use common::error_status;
pub use delete::{delete_instance, delete_record};
pub use get::{get_instance, instance_records, list_instances, list_records, resolve_code};
pub use patch::mark_manually;
pub use post::{auto_mark, close_attendance, initialize_attendance};

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_instances))
        .route("/initialize", post(initialize_attendance))
        .route("/close", post(close_attendance))
        .route("/auto-mark", post(auto_mark))
        .route("/resolve", get(resolve_code))
        .route(
            "/instance/{instance_id}",
            get(get_instance).delete(delete_instance),
        )
        .route("/instance/{instance_id}/records", get(instance_records))
        .route("/records", get(list_records))
        .route("/records/status", patch(mark_manually))
        .route("/records/{attendance_id}", delete(delete_record))
}
