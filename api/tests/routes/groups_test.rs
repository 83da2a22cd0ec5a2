use crate::helpers::fixtures::{COURSE_ID, seed_courses, seed_student};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use db::models::{group_member, student::StudentStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

#[tokio::test]
async fn group_membership_flow() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S2", Some(COURSE_ID), StudentStatus::Active).await;

    let (status, json) = app
        .json(
            "POST",
            "/group",
            json!({ "name": "Team A", "description": "Lab group", "courseId": COURSE_ID }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["groupId"], "GRP-000001");
    assert_eq!(json["data"]["isGeneral"], false);

    let (status, _) = app
        .json(
            "POST",
            "/group/GRP-000001/members",
            json!({ "studentId": "S1", "isLeader": true }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app
        .json("POST", "/group/GRP-000001/members", json!({ "studentId": "S2" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = app
        .json("POST", "/group/GRP-000001/members", json!({ "studentId": "S2" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Student is already a member of this group");

    let (status, json) = app.get("/group").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["memberCount"], 2);

    let (status, json) = app.get("/group/GRP-000001").await;
    assert_eq!(status, StatusCode::OK);
    let members = json["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["studentId"], "S1");
    assert_eq!(members[0]["isLeader"], true);

    let (_, json) = app.get("/student/S1").await;
    assert_eq!(json["data"]["groups"][0]["groupName"], "Team A");

    let (status, _) = app.empty("DELETE", "/group/GRP-000001/members/S2").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.empty("DELETE", "/group/GRP-000001/members/S2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_group_removes_its_members() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;

    app.json("POST", "/group", json!({ "name": "Study circle", "isGeneral": true }))
        .await;
    app.json("POST", "/group/GRP-000001/members", json!({ "studentId": "S1" }))
        .await;

    let (status, _) = app.empty("DELETE", "/group/GRP-000001").await;
    assert_eq!(status, StatusCode::OK);
    let members = group_member::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(members, 0);

    let (status, _) = app.empty("DELETE", "/group/GRP-000001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn group_validation() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, _) = app.json("POST", "/group", json!({ "description": "x" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.get("/group").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json("POST", "/group/GRP-404/members", json!({ "studentId": "S1" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.json("POST", "/group", json!({ "name": "Team B" })).await;
    let (status, json) = app
        .json("POST", "/group/GRP-000001/members", json!({ "studentId": "GHOST" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Student not found");

    let (status, json) = app
        .json("PUT", "/group/GRP-000001", json!({ "name": "Team B2", "isGeneral": true }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Team B2");

    let (status, _) = app
        .json("PUT", "/group/GRP-404", json!({ "name": "Nobody" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
