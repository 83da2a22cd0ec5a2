use crate::helpers::fixtures::{COURSE_ID, OTHER_COURSE_ID, seed_courses, seed_student};
use crate::helpers::{TestApp, make_test_app};
use axum::http::StatusCode;
use db::models::student::StudentStatus;
use serde_json::{Value, json};

async fn add_event(app: &TestApp, title: &str, start: &str, end: &str, course_id: Option<&str>) {
    let (status, _) = app
        .json(
            "POST",
            "/event",
            json!({
                "title": title,
                "description": format!("{title} details"),
                "startDate": start,
                "endDate": end,
                "location": "LT 1",
                "courseId": course_id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

fn titles(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn month_view_filters_by_month_and_course() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    add_event(&app, "Quiz", "2030-06-20T09:00:00Z", "2030-06-20T10:00:00Z", Some(COURSE_ID)).await;
    add_event(&app, "Kickoff", "2030-06-01T00:00:00Z", "2030-06-01T02:00:00Z", Some(COURSE_ID)).await;
    add_event(&app, "Algebra review", "2030-06-11T09:00:00Z", "2030-06-11T10:00:00Z", Some(OTHER_COURSE_ID)).await;
    add_event(&app, "July exam", "2030-07-01T00:00:00Z", "2030-07-01T03:00:00Z", Some(COURSE_ID)).await;

    let (status, json) = app.get("/calendar/events?year=2030&month=6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Kickoff", "Algebra review", "Quiz"]);
    assert_eq!(json["data"][0]["courseCode"], "CSC 101");

    let (_, json) = app
        .get(&format!("/calendar/events?year=2030&month=6&courseId={OTHER_COURSE_ID}"))
        .await;
    assert_eq!(titles(&json), vec!["Algebra review"]);

    let (status, json) = app.get("/calendar/events?year=2031&month=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn month_view_rejects_bad_parameters() {
    let app = make_test_app().await;
    for uri in [
        "/calendar/events",
        "/calendar/events?year=2030",
        "/calendar/events?year=2030&month=13",
        "/calendar/events?year=abc&month=1",
    ] {
        let (status, _) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn upcoming_skips_past_events_and_honours_limit() {
    let app = make_test_app().await;
    add_event(&app, "Old", "2020-01-01T09:00:00Z", "2020-01-01T10:00:00Z", None).await;
    add_event(&app, "Later", "2040-01-02T09:00:00Z", "2040-01-02T10:00:00Z", None).await;
    add_event(&app, "Soon", "2040-01-01T09:00:00Z", "2040-01-01T10:00:00Z", None).await;

    let (status, json) = app.get("/calendar/upcoming").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Soon", "Later"]);

    let (_, json) = app.get("/calendar/upcoming?limit=1").await;
    assert_eq!(titles(&json), vec!["Soon"]);

    let (status, _) = app.get("/calendar/upcoming?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.get("/calendar/upcoming?limit=ten").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn schedule_follows_the_students_course() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S2", None, StudentStatus::Active).await;
    add_event(&app, "Lab", "2030-06-05T14:30:00Z", "2030-06-05T16:00:00Z", Some(COURSE_ID)).await;
    add_event(&app, "Next week lab", "2030-06-12T14:30:00Z", "2030-06-12T16:00:00Z", Some(COURSE_ID)).await;
    add_event(&app, "Other course", "2030-06-05T09:00:00Z", "2030-06-05T10:00:00Z", Some(OTHER_COURSE_ID)).await;

    let (status, json) = app.get("/calendar/schedule/S1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Lab", "Next week lab"]);

    let (_, json) = app.get("/calendar/schedule/S1?weekStart=2030-06-03").await;
    assert_eq!(titles(&json), vec!["Lab"]);
    assert_eq!(json["data"][0]["dayOfWeek"], 4);
    assert_eq!(json["data"][0]["time"], "14:30:00");

    let (status, json) = app.get("/calendar/schedule/S2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].as_array().unwrap().is_empty());

    let (status, _) = app.get("/calendar/schedule/S1?weekStart=June").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.get("/calendar/schedule/GHOST").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deadlines_only_include_future_assignments() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    for (title, course_id, deadline) in [
        ("Past essay", COURSE_ID, "2020-01-01T00:00:00Z"),
        ("Project", COURSE_ID, "2040-05-01T00:00:00Z"),
        ("Problem set", OTHER_COURSE_ID, "2040-04-01T00:00:00Z"),
    ] {
        app.json(
            "POST",
            "/assignment",
            json!({ "title": title, "courseId": course_id, "deadline": deadline }),
        )
        .await;
    }

    let (status, json) = app.get("/calendar/deadlines").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&json), vec!["Problem set", "Project"]);
    assert_eq!(json["data"][0]["courseName"], "Linear Algebra");

    let (_, json) = app.get(&format!("/calendar/deadlines?courseId={COURSE_ID}")).await;
    assert_eq!(titles(&json), vec!["Project"]);
}
