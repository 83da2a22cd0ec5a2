use crate::helpers::fixtures::{COURSE_ID, OTHER_COURSE_ID, seed_courses, seed_student};
use crate::helpers::{TestApp, make_test_app, make_test_app_with_audit};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use db::models::{
    attendance_instance::{self, ClassType},
    attendance_log, attendance_record, security_log,
    student::StudentStatus,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use services::token::{TokenPayload, TokenService};

const LAT: f64 = 6.5;
const LON: f64 = 3.3;

async fn seeded_app() -> TestApp {
    let app = make_test_app().await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S2", Some(COURSE_ID), StudentStatus::Active).await;
    seed_student(&app.db, "S3", Some(COURSE_ID), StudentStatus::Inactive).await;
    seed_student(&app.db, "S4", Some(OTHER_COURSE_ID), StudentStatus::Active).await;
    app
}

async fn initialize_physical(app: &TestApp) -> Value {
    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({
                "courseId": COURSE_ID,
                "date": "2024-06-01",
                "classType": "physical",
                "latitude": LAT,
                "longitude": LON
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["data"].clone()
}

async fn resolve_token(app: &TestApp, qr_code: &str) -> String {
    let (status, json) = app
        .get(&format!("/attendance/resolve?code={qr_code}"))
        .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["data"]["token"].as_str().unwrap().to_owned()
}

async fn scan(app: &TestApp, token: &str, body: Value) -> (StatusCode, Value) {
    app.json("POST", &format!("/attendance/auto-mark?token={token}"), body)
        .await
}

#[tokio::test]
async fn physical_class_without_coordinates_is_rejected_and_nothing_is_created() {
    let app = seeded_app().await;

    for body in [
        json!({ "courseId": COURSE_ID, "date": "2024-06-01", "classType": "physical" }),
        json!({ "courseId": COURSE_ID, "date": "2024-06-01", "classType": "physical", "latitude": LAT }),
    ] {
        let (status, json) = app.json("POST", "/attendance/initialize", body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
    }

    let instances = attendance_instance::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(instances, 0);
}

#[tokio::test]
async fn initialize_validates_input() {
    let app = seeded_app().await;

    let (status, json) = app
        .json("POST", "/attendance/initialize", json!({ "courseId": COURSE_ID }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Course ID, date, and class type are required");

    let (status, _) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": COURSE_ID, "date": "2024-06-01", "classType": "hybrid" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": COURSE_ID, "date": "01/06/2024", "classType": "online" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": "NOPE", "date": "2024-06-01", "classType": "online" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Course not found");
}

#[tokio::test]
async fn initialize_enrolls_every_active_student_as_absent() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;

    let instance_id = data["attendanceInstanceId"].as_str().unwrap();
    assert_eq!(data["courseId"], COURSE_ID);
    assert_eq!(data["date"], "2024-06-01");
    assert_eq!(data["classType"], "physical");
    assert_eq!(data["enrolled"], 2);
    assert_eq!(data["qrCode"], format!("ATT-{instance_id}"));
    assert!(
        data["qrImage"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,")
    );
    assert!(data.get("token").is_none());

    let (status, json) = app
        .get(&format!("/attendance/instance/{instance_id}/records"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let records = json["data"].as_array().unwrap();
    let students: Vec<&str> = records
        .iter()
        .map(|r| r["studentId"].as_str().unwrap())
        .collect();
    assert_eq!(students, vec!["S1", "S2"]);
    assert!(records.iter().all(|r| r["status"] == "absent"));
}

#[tokio::test]
async fn scan_marks_present_once_then_reports_already_marked() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    let body = json!({ "studentId": "S1", "latitude": 6.5002, "longitude": 3.3001 });
    let (status, json) = scan(&app, &token, body.clone()).await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(
        json["message"],
        "Attendance marked successfully. Location verified."
    );
    assert_eq!(json["data"]["locationChecked"], true);

    let (status, json) = scan(&app, &token, body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Attendance already marked");

    let (_, json) = app.get("/attendance/records?studentId=S1").await;
    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "present");
    assert!(records[0]["markedAt"].is_string());

    let logs = attendance_log::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(logs, 1);
}

#[tokio::test]
async fn scan_outside_the_geofence_is_forbidden_and_logged() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    // ~111m north of the classroom.
    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": 6.501, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("You must be within 50m"), "{message}");
    assert!(message.contains("111m away"), "{message}");

    let (status, _) = scan(&app, &token, json!({ "studentId": "S1" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let logs = security_log::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(logs, 2);

    let (_, json) = app.get("/attendance/records?studentId=S1").await;
    assert_eq!(json["data"][0]["status"], "absent");
}

#[tokio::test]
async fn geofence_boundary_is_judged_in_whole_meters() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;
    let north = |meters: f64| LAT + meters / 111_319.49;

    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": north(50.3), "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");

    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "S2", "latitude": north(50.6), "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("51m away"), "{message}");
}

#[tokio::test]
async fn expired_token_is_gone_even_with_a_perfect_location() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;

    let stale = TokenService::new(&app.config.jwt_secret, Duration::minutes(15));
    let (token, _) = stale
        .issue(
            &TokenPayload {
                course_id: COURSE_ID.into(),
                instance_id: data["attendanceInstanceId"].as_str().unwrap().into(),
                class_type: ClassType::Physical,
                latitude: LAT,
                longitude: LON,
            },
            Utc::now() - Duration::hours(1),
        )
        .unwrap();

    let (status, _) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": LAT, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::GONE);
}

#[tokio::test]
async fn tampered_token_is_unauthorized() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    let forged = TokenService::new("someone-elses-secret", Duration::minutes(15));
    let (bad, _) = forged
        .issue(
            &TokenPayload {
                course_id: COURSE_ID.into(),
                instance_id: data["attendanceInstanceId"].as_str().unwrap().into(),
                class_type: ClassType::Physical,
                latitude: LAT,
                longitude: LON,
            },
            Utc::now(),
        )
        .unwrap();
    assert_ne!(bad, token);

    let (status, _) = scan(
        &app,
        &bad,
        json!({ "studentId": "S1", "latitude": LAT, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn scan_requires_token_and_known_student() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    let (status, _) = app
        .json("POST", "/attendance/auto-mark", json!({ "studentId": "S1" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "GHOST", "latitude": LAT, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Student not found");
}

#[tokio::test]
async fn closed_session_rejects_scans_and_cannot_close_twice() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let instance_id = data["attendanceInstanceId"].as_str().unwrap();
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    let (status, json) = app
        .empty("POST", &format!("/attendance/close?instanceId={instance_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendance successfully closed");

    let (status, json) = app
        .empty("POST", &format!("/attendance/close?instanceId={instance_id}"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Attendance already closed");

    let (status, _) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": LAT, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::GONE);

    let (status, _) = app
        .get(&format!("/attendance/resolve?code=ATT-{instance_id}"))
        .await;
    assert_eq!(status, StatusCode::GONE);

    let (_, json) = app.get(&format!("/attendance/instance/{instance_id}")).await;
    assert_eq!(json["data"]["isClosed"], true);
    assert_eq!(json["data"]["state"], "closed");
}

#[tokio::test]
async fn close_validates_instance_id() {
    let app = seeded_app().await;

    let (status, _) = app.empty("POST", "/attendance/close").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .empty("POST", "/attendance/close?instanceId=ATT_INT-999999")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resolve_rejects_malformed_and_unknown_codes() {
    let app = seeded_app().await;

    let (status, _) = app.get("/attendance/resolve?code=HELLO").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/attendance/resolve?code=ATT-ATT_INT-424242").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn online_class_without_audit_needs_no_location() {
    let app = seeded_app().await;
    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": COURSE_ID, "date": "2024-06-02", "classType": "online" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = resolve_token(&app, json["data"]["qrCode"].as_str().unwrap()).await;

    let (status, json) = scan(&app, &token, json!({ "studentId": "S2" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendance marked successfully.");
    assert_eq!(json["data"]["locationChecked"], false);
}

#[tokio::test]
async fn coordinates_posted_as_form_strings_are_accepted() {
    let app = seeded_app().await;

    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({
                "courseId": COURSE_ID,
                "date": "2024-06-02",
                "classType": "online",
                "latitude": "",
                "longitude": ""
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");

    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({
                "courseId": COURSE_ID,
                "date": "2024-06-03",
                "classType": "physical",
                "latitude": "6.5",
                "longitude": "3.3"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    let token = resolve_token(&app, json["data"]["qrCode"].as_str().unwrap()).await;

    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": "6.5002", "longitude": "3.3001" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["data"]["locationChecked"], true);

    // Blank strings are absent, so a physical scan still needs a location.
    let (status, _) = scan(
        &app,
        &token,
        json!({ "studentId": "S2", "latitude": "", "longitude": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn malformed_body_gets_the_error_envelope() {
    let app = seeded_app().await;

    let (status, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({
                "courseId": COURSE_ID,
                "date": "2024-06-02",
                "classType": "physical",
                "latitude": "north",
                "longitude": "3.3"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string(), "{json}");

    let instances = attendance_instance::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(instances, 0);
}

#[tokio::test]
async fn audited_online_class_asks_for_location() {
    let app = make_test_app_with_audit(true).await;
    seed_courses(&app.db).await;
    seed_student(&app.db, "S1", Some(COURSE_ID), StudentStatus::Active).await;

    let (_, json) = app
        .json(
            "POST",
            "/attendance/initialize",
            json!({ "courseId": COURSE_ID, "date": "2024-06-02", "classType": "online" }),
        )
        .await;
    let token = resolve_token(&app, json["data"]["qrCode"].as_str().unwrap()).await;

    let (status, _) = scan(&app, &token, json!({ "studentId": "S1" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = scan(
        &app,
        &token,
        json!({ "studentId": "S1", "latitude": 9.0, "longitude": 7.4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Attendance marked successfully. Random location check completed."
    );
}

#[tokio::test]
async fn student_who_joined_after_initialize_can_still_scan() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let token = resolve_token(&app, data["qrCode"].as_str().unwrap()).await;

    seed_student(&app.db, "S9", Some(COURSE_ID), StudentStatus::Active).await;
    let (status, _) = scan(
        &app,
        &token,
        json!({ "studentId": "S9", "latitude": LAT, "longitude": LON }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = app
        .get(&format!(
            "/attendance/instance/{}",
            data["attendanceInstanceId"].as_str().unwrap()
        ))
        .await;
    assert_eq!(json["data"]["present"], 1);
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["state"], "open");
}

#[tokio::test]
async fn listing_instances() {
    let app = seeded_app().await;

    let (status, json) = app.get("/attendance").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "No instance was found");
    assert_eq!(json["error"], "No instance was found");

    initialize_physical(&app).await;
    let (status, json) = app.get("/attendance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Instances successfully retrieved");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert!(json["data"][0].get("token").is_none());
}

#[tokio::test]
async fn deleting_an_instance_removes_its_records() {
    let app = seeded_app().await;
    let data = initialize_physical(&app).await;
    let instance_id = data["attendanceInstanceId"].as_str().unwrap();

    let (status, json) = app
        .empty("DELETE", &format!("/attendance/instance/{instance_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Instance deleted successfully");

    let records = attendance_record::Entity::find().count(&app.db).await.unwrap();
    assert_eq!(records, 0);

    let (status, _) = app
        .empty("DELETE", &format!("/attendance/instance/{instance_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn manual_mark_and_record_management() {
    let app = seeded_app().await;
    initialize_physical(&app).await;

    let (_, json) = app.get("/attendance/records?studentId=S2&date=2024-06-01").await;
    let attendance_id = json["data"][0]["attendanceId"].as_str().unwrap().to_owned();

    let (status, _) = app.empty("PATCH", "/attendance/records/status").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .empty(
            "PATCH",
            &format!("/attendance/records/status?attendanceId={attendance_id}&studentId=S1"),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let (status, json) = app
            .empty(
                "PATCH",
                &format!("/attendance/records/status?attendanceId={attendance_id}&studentId=S2"),
            )
            .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(json["message"], "Attendance successfully marked");
        assert_eq!(json["data"]["status"], "present");
    }

    let (status, _) = app.get("/attendance/records?date=June").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .empty("DELETE", &format!("/attendance/records/{attendance_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendance deleted successfully");

    let (status, _) = app
        .empty("DELETE", &format!("/attendance/records/{attendance_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
