use crate::helpers::fixtures::{COURSE_ID, LECTURER_ID, seed_courses, seed_student};
use crate::helpers::make_test_app;
use axum::http::StatusCode;
use db::models::student::StudentStatus;
use serde_json::json;

#[tokio::test]
async fn create_conversation_validates_input() {
    let app = make_test_app().await;

    let (status, json) = app
        .json("POST", "/chat/conversations", json!({ "title": "Lab", "type": "group" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required fields");

    let (status, _) = app
        .json(
            "POST",
            "/chat/conversations",
            json!({ "title": "Lab", "type": "broadcast", "participants": ["S1"] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json(
            "POST",
            "/chat/conversations",
            json!({ "title": "Lab", "type": "course", "participants": ["S1"], "courseId": "NOPE" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conversations_carry_their_latest_message() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;

    let (status, json) = app
        .json(
            "POST",
            "/chat/conversations",
            json!({ "title": "Office hours", "type": "Direct", "participants": ["S1", LECTURER_ID, "S1 "] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["conversationId"], "CNV-000001");
    assert_eq!(json["data"]["type"], "direct");
    assert_eq!(json["data"]["participants"], json!(["S1", LECTURER_ID]));

    app.json(
        "POST",
        "/chat/conversations",
        json!({ "title": "Quiet room", "type": "group", "participants": ["S1"] }),
    )
    .await;

    let (status, json) = app
        .json(
            "POST",
            "/chat/messages",
            json!({ "conversationId": "CNV-000001", "senderId": LECTURER_ID, "content": "See you at 2" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["senderName"], "Dr. Ada Eze");

    let (status, json) = app.get("/chat/conversations/S1").await;
    assert_eq!(status, StatusCode::OK);
    let list = json["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["conversationId"], "CNV-000001");
    assert_eq!(list[0]["lastMessage"], "See you at 2");
    assert_eq!(list[0]["lastSenderName"], "Dr. Ada Eze");
    assert!(list[1]["lastMessage"].is_null());

    let (_, json) = app.get("/chat/conversations/NOBODY").await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn messages_page_back_from_the_newest() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    app.json(
        "POST",
        "/chat/conversations",
        json!({ "title": "Thread", "type": "group", "participants": ["S1"] }),
    )
    .await;

    for n in 1..=5 {
        let (status, _) = app
            .json(
                "POST",
                "/chat/messages",
                json!({ "conversationId": "CNV-000001", "senderId": "S1", "content": format!("m{n}") }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let contents = |json: &serde_json::Value| -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["content"].as_str().unwrap().to_owned())
            .collect()
    };

    let (status, json) = app.get("/chat/messages/CNV-000001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contents(&json), vec!["m1", "m2", "m3", "m4", "m5"]);
    assert_eq!(json["data"][0]["senderName"], "Student S1");

    let (_, json) = app.get("/chat/messages/CNV-000001?limit=2").await;
    assert_eq!(contents(&json), vec!["m4", "m5"]);

    let (_, json) = app.get("/chat/messages/CNV-000001?limit=2&offset=2").await;
    assert_eq!(contents(&json), vec!["m2", "m3"]);

    let (status, _) = app.get("/chat/messages/CNV-404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn send_message_requires_a_known_conversation() {
    let app = make_test_app().await;

    let (status, _) = app
        .json("POST", "/chat/messages", json!({ "conversationId": "CNV-000001" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .json(
            "POST",
            "/chat/messages",
            json!({ "conversationId": "CNV-404", "senderId": "S1", "content": "hello?" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Conversation not found");
}

#[tokio::test]
async fn course_chat_is_created_once() {
    let app = make_test_app().await;
    seed_courses(&app.db).await;

    let (status, json) = app.get(&format!("/chat/course-chat/{COURSE_ID}")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["title"], "Introduction to Computing");
    assert_eq!(json["data"]["type"], "course");
    let id = json["data"]["conversationId"].clone();

    let (status, json) = app.get(&format!("/chat/course-chat/{COURSE_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["conversationId"], id);

    let (status, _) = app.get("/chat/course-chat/NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
