use common::config::Config;
use sea_orm::DatabaseConnection;
use services::attendance::AttendanceService;
use std::sync::Arc;

/// Everything a handler needs, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    attendance: Arc<AttendanceService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self::with_attendance(db, AttendanceService::from_config(config))
    }

    /// Same as [`AppState::new`] but with a caller-built attendance service,
    /// e.g. one whose location audit is pinned for tests.
    pub fn with_attendance(db: DatabaseConnection, attendance: AttendanceService) -> Self {
        Self {
            db,
            attendance: Arc::new(attendance),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn attendance(&self) -> &AttendanceService {
        &self.attendance
    }
}
