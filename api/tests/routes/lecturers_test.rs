use crate::helpers::fixtures::{LECTURER_ID, seed_courses};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn lecturer_crud_round() {
    let app = make_test_app().await;

    let (status, json) = app.get("/lecturer").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No lecturers found");

    let (status, json) = app
        .json(
            "POST",
            "/lecturer",
            json!({ "name": "Dr. Bola Ade", "email": "bola@uni.test", "phone": "0801" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["lecturerId"], "LEC-000001");
    let id = json["data"]["lecturerId"].as_str().unwrap().to_owned();

    let (status, json) = app
        .json(
            "PUT",
            &format!("/lecturer/{id}"),
            json!({ "name": "Prof. Bola Ade", "email": "bola@uni.test" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Prof. Bola Ade");

    let (status, json) = app.get("/lecturer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let (status, _) = app.empty("DELETE", &format!("/lecturer/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/lecturer/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lecturer_create_rejects_missing_duplicate_and_invalid_input() {
    let app = make_test_app().await;

    let (status, json) = app
        .json("POST", "/lecturer", json!({ "name": "No Email" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Name and email are required");

    let (status, _) = app
        .json("POST", "/lecturer", json!({ "name": "X", "email": "not-an-email" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json!({ "name": "Dr. C", "email": "c@uni.test" });
    let (status, _) = app.json("POST", "/lecturer", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, json) = app.json("POST", "/lecturer", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A lecturer with this email already exists");
}

#[tokio::test]
async fn lecturer_detail_lists_courses_and_blocks_delete() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, json) = app.get(&format!("/lecturer/{LECTURER_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["courses"].as_array().unwrap().len(), 2);

    let (status, _) = app
        .empty("DELETE", &format!("/lecturer/{LECTURER_ID}"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = app
        .json(
            "PUT",
            "/lecturer/LEC-404",
            json!({ "name": "Nobody", "email": "nobody@uni.test" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Lecturer not found for update");
}
