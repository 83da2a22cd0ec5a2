use api::routes::app;
use api::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::Duration;
use common::config::Config;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use services::{attendance::AttendanceService, audit::AuditSampler, token::TokenService};
use tower::ServiceExt;

/// The full application over a fresh in-memory database.
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub config: Config,
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.empty("GET", uri).await
    }

    pub async fn empty(&self, method: &str, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }
}

/// Online classes are never spot-checked.
pub async fn make_test_app() -> TestApp {
    make_test_app_with_audit(false).await
}

/// `audit` pins the outcome of the online-class location spot check.
pub async fn make_test_app_with_audit(audit: bool) -> TestApp {
    let db = setup_test_db().await;
    let config = Config::for_tests();
    let attendance = AttendanceService::new(
        TokenService::new(
            &config.jwt_secret,
            Duration::minutes(config.attendance_token_ttl_minutes),
        ),
        AuditSampler::fixed(audit),
        config.geofence_radius_meters,
    );
    let router = app(AppState::with_attendance(db.clone(), attendance));

    TestApp { router, db, config }
}
