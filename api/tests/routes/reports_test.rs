use crate::helpers::fixtures::{COURSE_ID, seed_courses, seed_student};
use crate::helpers::{TestApp, make_test_app};
use axum::http::StatusCode;
use db::models::student::StudentStatus;
use serde_json::json;

/// Opens an online session on `date` and marks `present` as attended.
async fn run_session(app: &TestApp, date: &str, present: &[&str]) {
    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": COURSE_ID, "date": date, "classType": "online" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    let instance_id = json["data"]["attendanceInstanceId"].as_str().unwrap().to_owned();

    let (_, json) = app
        .get(&format!("/attendance/instance/{instance_id}/records"))
        .await;
    for record in json["data"].as_array().unwrap() {
        let student_id = record["studentId"].as_str().unwrap();
        if present.contains(&student_id) {
            let attendance_id = record["attendanceId"].as_str().unwrap();
            let (status, _) = app
                .empty(
                    "PATCH",
                    &format!(
                        "/attendance/records/status?attendanceId={attendance_id}&studentId={student_id}"
                    ),
                )
                .await;
            assert_eq!(status, StatusCode::ACCEPTED);
        }
    }
}

#[tokio::test]
async fn dashboard_counts_everything() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    app.json(
        "POST",
        "/assignment",
        json!({ "title": "Lab 1", "courseId": COURSE_ID, "deadline": "2030-01-01" }),
    )
    .await;

    let (status, json) = app.get("/report/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["totalStudents"], 1);
    assert_eq!(data["totalCourses"], 2);
    assert_eq!(data["totalAssignments"], 1);
    assert_eq!(data["totalEvents"], 0);
    assert_eq!(data["recentAssignments"][0]["title"], "Lab 1");
    assert!(data["recentEvents"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn attendance_report_ranks_students_by_percentage() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S2", Some(COURSE_ID), StudentStatus::Active).await;

    run_session(&app, "2024-06-01", &["S1", "S2"]).await;
    run_session(&app, "2024-06-08", &["S2"]).await;
    run_session(&app, "2024-06-15", &["S2"]).await;

    let (status, json) = app.get("/report/attendance").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["studentId"], "S2");
    assert_eq!(rows[0]["attendancePercentage"], 100.0);
    assert_eq!(rows[1]["studentId"], "S1");
    assert_eq!(rows[1]["name"], "Student S1");
    assert_eq!(rows[1]["totalSessions"], 3);
    assert_eq!(rows[1]["presentSessions"], 1);
    assert_eq!(rows[1]["attendancePercentage"], 33.33);

    let (_, json) = app
        .get("/report/attendance?startDate=2024-06-01&endDate=2024-06-08")
        .await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows[1]["studentId"], "S1");
    assert_eq!(rows[1]["attendancePercentage"], 50.0);

    let (_, json) = app.get("/report/attendance?courseId=MTH201").await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let (status, _) = app.get("/report/attendance?startDate=06/01/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
