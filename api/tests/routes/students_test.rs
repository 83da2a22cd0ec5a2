use crate::helpers::fixtures::{COURSE_ID, seed_courses};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use db::models::student;
use sea_orm::EntityTrait;
use serde_json::json;
use services::password::verify_password;

fn registration(student_id: &str, email: &str) -> serde_json::Value {
    json!({
        "studentId": student_id,
        "name": "Chioma Nwosu",
        "email": email,
        "phone": "08011112222",
        "password": "hunter22",
        "courseId": COURSE_ID
    })
}

#[tokio::test]
async fn registration_hashes_the_password_and_hides_it() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, json) = app
        .json("POST", "/student", registration("S100", "chi@uni.test"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Student registered successfully");
    assert_eq!(json["data"]["status"], "active");
    assert!(json["data"].get("password").is_none());
    assert!(json["data"].get("passwordHash").is_none());

    let stored = student::Entity::find_by_id("S100")
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password_hash, "hunter22");
    assert!(verify_password(&stored.password_hash, "hunter22"));

    let (status, json) = app
        .json("POST", "/student", registration("S100", "other@uni.test"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Student already exists");
}

#[tokio::test]
async fn registration_requires_every_field() {
    let app = make_test_app().await;

    let (status, json) = app
        .json("POST", "/student", json!({ "studentId": "S1", "name": "A" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        "Student ID, name, email, phone, and password are required"
    );

    let mut body = registration("S1", "a@uni.test");
    body["status"] = json!("suspended");
    let (status, _) = app.json("POST", "/student", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_student_list_is_a_conflict() {
    let app = make_test_app().await;
    let (status, json) = app.get("/student").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "No students found");
}

#[tokio::test]
async fn student_detail_update_and_delete() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    app.json("POST", "/student", registration("S1", "s1@uni.test"))
        .await;

    let (status, json) = app.get("/student/S1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["courseCode"], "CSC 101");
    assert_eq!(json["data"]["groups"], json!([]));

    let (status, json) = app
        .json(
            "PUT",
            "/student/S1",
            json!({
                "name": "Chioma N.",
                "email": "s1@uni.test",
                "phone": "08011112222",
                "status": "inactive"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "inactive");

    let (status, _) = app.empty("DELETE", "/student/S1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/student/S1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
