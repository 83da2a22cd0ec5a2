use crate::helpers::fixtures::{COURSE_ID, LECTURER_ID, OTHER_COURSE_ID, seed_courses, seed_student};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use db::models::student::StudentStatus;
use serde_json::json;

#[tokio::test]
async fn course_create_applies_defaults_and_rejects_duplicates() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let body = json!({
        "courseId": "PHY101",
        "courseName": "Mechanics",
        "courseCode": "PHY 101",
        "lecturerId": LECTURER_ID
    });
    let (status, json) = app.json("POST", "/course", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Course added successfully");
    assert_eq!(json["data"]["credits"], 3);
    assert_eq!(json["data"]["semester"], "Fall 2024");

    let (status, json) = app.json("POST", "/course", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Course already exists");

    let (status, _) = app
        .json("POST", "/course", json!({ "courseId": "X1", "courseName": "Only a name" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = app
        .json(
            "POST",
            "/course",
            json!({
                "courseId": "CHM101",
                "courseName": "Chemistry",
                "courseCode": "CHM 101",
                "lecturerId": "LEC-404"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Lecturer not found");
}

#[tokio::test]
async fn course_listing_and_detail() {
    let app = make_test_app().await;

    let (status, json) = app.get("/course").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No courses found");

    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S2", Some(COURSE_ID), StudentStatus::Active).await;

    let (status, json) = app.get("/course").await;
    assert_eq!(status, StatusCode::OK);
    let courses = json["data"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["lecturerName"], "Dr. Ada Eze");

    let (status, json) = app.get(&format!("/course/{COURSE_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["totalStudents"], 2);
    assert_eq!(json["data"]["lecturer"]["lecturerId"], LECTURER_ID);

    let (status, _) = app.get("/course/NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn registering_a_student_for_a_course() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", None, StudentStatus::Active).await;

    let (status, json) = app.get("/course/student/S1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No courses found for this student");

    let body = json!({ "courseId": OTHER_COURSE_ID, "studentId": "S1" });
    let (status, json) = app.json("POST", "/course/register", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Course registered successfully");

    let (status, _) = app.json("POST", "/course/register", body).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = app.get("/course/student/S1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["courseId"], OTHER_COURSE_ID);

    let (status, _) = app
        .json(
            "POST",
            "/course/register",
            json!({ "courseId": "NOPE", "studentId": "S1" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json(
            "POST",
            "/course/register",
            json!({ "courseId": COURSE_ID, "studentId": "GHOST" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn course_update_and_delete() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, json) = app
        .json(
            "PUT",
            &format!("/course/{OTHER_COURSE_ID}"),
            json!({
                "courseName": "Linear Algebra II",
                "courseCode": "MTH 202",
                "lecturerId": LECTURER_ID,
                "credits": 4
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["courseCode"], "MTH 202");
    assert_eq!(json["data"]["credits"], 4);

    let (status, json) = app
        .json(
            "PUT",
            "/course/NOPE",
            json!({ "courseName": "A", "courseCode": "B", "lecturerId": LECTURER_ID }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Course not found for update");

    let (status, _) = app
        .empty("DELETE", &format!("/course/{OTHER_COURSE_ID}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .empty("DELETE", &format!("/course/{OTHER_COURSE_ID}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
