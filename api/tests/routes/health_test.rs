use crate::helpers::make_test_app;
use axum::http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app().await;

    let (status, json) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = make_test_app().await;
    let (status, _) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
