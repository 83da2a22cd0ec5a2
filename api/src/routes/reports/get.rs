use super::common::{
    AttendanceReportQuery, Dashboard, RECENT_LIMIT, StudentAttendance, percentage, tally,
};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error, non_empty};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use db::models::{assignment, attendance_record, course, event, student};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;

async fn load_dashboard(db: &DatabaseConnection) -> Result<Dashboard, DbErr> {
    Ok(Dashboard {
        total_students: student::Entity::find().count(db).await?,
        total_courses: course::Entity::find().count(db).await?,
        total_assignments: assignment::Entity::find().count(db).await?,
        total_events: event::Entity::find().count(db).await?,
        recent_assignments: assignment::Entity::find()
            .order_by_desc(assignment::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(db)
            .await?,
        recent_events: event::Entity::find()
            .order_by_desc(event::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(db)
            .await?,
    })
}

/// GET /report/dashboard
///
/// Entity counts plus the ten most recently created assignments and events.
pub async fn dashboard(State(state): State<AppState>) -> Response {
    match load_dashboard(state.db()).await {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse::success(data, "Dashboard data retrieved successfully")),
        )
            .into_response(),
        Err(e) => internal_error("Error fetching dashboard data", e),
    }
}

/// GET /report/attendance?courseId=CSC101&startDate=2024-06-01&endDate=2024-06-30
///
/// Per-student session totals computed from attendance records, best
/// attendance first. All filters are optional; dates are inclusive.
///
/// ### Response: 200 OK
/// ```json
/// [{
///   "studentId": "S1",
///   "name": "Ada Obi",
///   "email": "ada@example.com",
///   "totalSessions": 3,
///   "presentSessions": 2,
///   "attendancePercentage": 66.67
/// }]
/// ```
pub async fn attendance_report(
    State(state): State<AppState>,
    Query(query): Query<AttendanceReportQuery>,
) -> Response {
    let parse = |raw: Option<String>| -> Result<Option<NaiveDate>, ()> {
        match non_empty(raw) {
            None => Ok(None),
            Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ()),
        }
    };
    let (Ok(start), Ok(end)) = (parse(query.start_date), parse(query.end_date)) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid startDate or endDate. Expected YYYY-MM-DD",
        );
    };

    let db = state.db();
    let mut select = attendance_record::Entity::find();
    if let Some(course_id) = non_empty(query.course_id) {
        select = select.filter(attendance_record::Column::CourseId.eq(course_id));
    }
    if let Some(start) = start {
        select = select.filter(attendance_record::Column::Date.gte(start));
    }
    if let Some(end) = end {
        select = select.filter(attendance_record::Column::Date.lte(end));
    }

    let records = match select.all(db).await {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error fetching attendance report", e),
    };
    let totals = tally(records.iter().map(|r| (r.student_id.as_str(), r.status)));

    let students: HashMap<String, student::Model> = match student::Entity::find()
        .filter(student::Column::StudentId.is_in(totals.keys().map(String::as_str)))
        .all(db)
        .await
    {
        Ok(rows) => rows.into_iter().map(|s| (s.student_id.clone(), s)).collect(),
        Err(e) => return internal_error("Error fetching attendance report", e),
    };

    let mut rows: Vec<StudentAttendance> = totals
        .into_iter()
        .map(|(student_id, (total, present))| {
            let found = students.get(&student_id);
            StudentAttendance {
                name: found.map(|s| s.name.clone()),
                email: found.map(|s| s.email.clone()),
                student_id,
                total_sessions: total,
                present_sessions: present,
                attendance_percentage: percentage(present, total),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.attendance_percentage
            .total_cmp(&a.attendance_percentage)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    (
        StatusCode::OK,
        Json(ApiResponse::success(rows, "Attendance report retrieved successfully")),
    )
        .into_response()
}
