use crate::helpers::fixtures::{COURSE_ID, seed_courses, seed_student};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use db::models::student::StudentStatus;
use serde_json::json;

#[tokio::test]
async fn assignments_are_listed_by_deadline() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    for (title, deadline) in [
        ("Lab 2", "2030-03-10T23:59:00Z"),
        ("Lab 1", "2030-03-01 12:00"),
    ] {
        let (status, _) = app
            .json(
                "POST",
                "/assignment",
                json!({ "title": title, "courseId": COURSE_ID, "deadline": deadline }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = app.get("/assignment").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Lab 1", "Lab 2"]);

    let (status, json) = app.get("/assignment/ASG-000001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Lab 2");
}

#[tokio::test]
async fn assignment_validation() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, _) = app
        .json("POST", "/assignment", json!({ "title": "No course" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .json(
            "POST",
            "/assignment",
            json!({ "title": "Bad date", "courseId": COURSE_ID, "deadline": "next week" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .json(
            "POST",
            "/assignment",
            json!({ "title": "Orphan", "courseId": "NOPE", "deadline": "2030-01-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Course not found");

    let (status, _) = app
        .json(
            "PUT",
            "/assignment/ASG-404",
            json!({ "title": "x", "courseId": COURSE_ID, "deadline": "2030-01-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.empty("DELETE", "/assignment/ASG-404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn events_require_fields_and_ordered_dates() {
    let app = make_test_app().await;

    let (status, json) = app.get("/event").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No Events found");

    let (status, json) = app
        .json("POST", "/event", json!({ "title": "Orientation" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        "Title, description, startDate, endDate, and location are required"
    );

    let (status, _) = app
        .json(
            "POST",
            "/event",
            json!({
                "title": "Backwards",
                "description": "Ends before it starts",
                "startDate": "2030-06-10T12:00:00Z",
                "endDate": "2030-06-10T10:00:00Z",
                "location": "LT 1"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .json(
            "POST",
            "/event",
            json!({
                "title": "Orientation",
                "description": "Welcome session",
                "startDate": "2030-06-10T09:00:00Z",
                "endDate": "2030-06-10T11:00:00Z",
                "location": "Main hall"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Event added successfully");
    assert_eq!(json["data"]["type"], "general");

    let (status, json) = app
        .json(
            "PUT",
            "/event/EVT-000001",
            json!({
                "title": "Orientation",
                "description": "Welcome session",
                "startDate": "2030-06-10T09:00:00Z",
                "endDate": "2030-06-10T12:00:00Z",
                "location": "Main hall",
                "type": "social"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["type"], "social");

    let (status, json) = app
        .json(
            "PUT",
            "/event/EVT-404",
            json!({
                "title": "x",
                "description": "x",
                "startDate": "2030-06-10",
                "endDate": "2030-06-10",
                "location": "x"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Event not found for update");

    let (status, _) = app.empty("DELETE", "/event/EVT-000001").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn notifications_crud() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, _) = app
        .json("POST", "/notification", json!({ "title": "No body" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = app
        .json(
            "POST",
            "/notification",
            json!({ "title": "Venue change", "message": "Moved to LT 3", "courseId": COURSE_ID }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["notificationId"], "NTF-000001");

    let (status, json) = app
        .json(
            "PUT",
            "/notification/NTF-000001",
            json!({ "title": "Venue change", "message": "Moved to LT 4" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["message"], "Moved to LT 4");
    assert!(json["data"]["courseId"].is_null());

    let (status, json) = app.get("/notification").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let (status, _) = app.empty("DELETE", "/notification/NTF-000001").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/notification/NTF-000001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn anonymous_feedback_hides_its_author() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;

    let (status, _) = app
        .json("POST", "/feedback", json!({ "content": "Who am I?" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = app
        .json(
            "POST",
            "/feedback",
            json!({ "studentId": "S1", "content": "Slides please", "isAnonymous": true }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["data"]["studentId"].is_null());

    let (status, json) = app
        .json(
            "POST",
            "/feedback",
            json!({ "studentId": "S1", "content": "More labs" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["studentId"], "S1");

    let (_, json) = app.get("/feedback/FDB-000001").await;
    assert!(json["data"]["studentId"].is_null());
    assert_eq!(json["data"]["isAnonymous"], true);

    let (status, json) = app.get("/feedback").await;
    assert_eq!(status, StatusCode::OK);
    let authors: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["studentId"].clone())
        .collect();
    assert!(authors.contains(&json!("S1")));
    assert!(authors.contains(&json!(null)));

    let (status, _) = app
        .json("POST", "/feedback", json!({ "studentId": "GHOST", "content": "hi" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.empty("DELETE", "/feedback/FDB-000001").await;
    assert_eq!(status, StatusCode::OK);
}
