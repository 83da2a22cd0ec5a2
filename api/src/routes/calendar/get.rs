use super::common::{
    CalendarEvent, Deadline, DeadlineQuery, MonthQuery, ScheduleEntry, ScheduleQuery,
    UpcomingQuery, month_bounds, parse_limit,
};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error, non_empty};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Days, NaiveDate, Utc};
use db::models::{assignment, course, event, student};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

/// GET /calendar/events?year=2024&month=6&courseId=CSC101
///
/// Events starting in the given month, earliest first. `courseId` is
/// optional.
///
/// ### Responses
/// - `200 OK` (possibly empty list)
/// - `400 Bad Request` missing year or month, or month outside 1..=12
pub async fn month_events(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let year = query.year.as_deref().and_then(|y| y.trim().parse::<i32>().ok());
    let month = query.month.as_deref().and_then(|m| m.trim().parse::<u32>().ok());
    let Some((start, end)) = year.zip(month).and_then(|(y, m)| month_bounds(y, m)) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "year and month are required; month must be between 1 and 12",
        );
    };

    let mut select = event::Entity::find()
        .filter(event::Column::StartDate.gte(start))
        .filter(event::Column::StartDate.lt(end));
    if let Some(course_id) = non_empty(query.course_id) {
        select = select.filter(event::Column::CourseId.eq(course_id));
    }

    match select
        .find_also_related(course::Entity)
        .order_by_asc(event::Column::StartDate)
        .all(state.db())
        .await
    {
        Ok(rows) => {
            let items: Vec<CalendarEvent> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Calendar events retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error fetching calendar events", e),
    }
}

/// GET /calendar/upcoming?limit=10
///
/// Events starting today or later, earliest first.
pub async fn upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Response {
    let Some(limit) = parse_limit(query.limit.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "limit must be a positive integer");
    };
    let Some(today) = Utc::now().date_naive().and_hms_opt(0, 0, 0) else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching upcoming events");
    };

    match event::Entity::find()
        .filter(event::Column::StartDate.gte(today.and_utc()))
        .find_also_related(course::Entity)
        .order_by_asc(event::Column::StartDate)
        .limit(limit)
        .all(state.db())
        .await
    {
        Ok(rows) => {
            let items: Vec<CalendarEvent> = rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Upcoming events retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error fetching upcoming events", e),
    }
}

/// GET /calendar/schedule/{student_id}?weekStart=2024-06-03
///
/// Events of the student's course. With `weekStart`, only the seven days
/// starting on that date.
///
/// ### Responses
/// - `200 OK` (empty when the student has no course)
/// - `400 Bad Request` malformed `weekStart`
/// - `404 Not Found` unknown student
pub async fn student_schedule(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    let week = match non_empty(query.week_start) {
        None => None,
        Some(raw) => {
            let bounds = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| Some((d, d.checked_add_days(Days::new(7))?)))
                .and_then(|(from, to)| {
                    Some((
                        from.and_hms_opt(0, 0, 0)?.and_utc(),
                        to.and_hms_opt(0, 0, 0)?.and_utc(),
                    ))
                });
            match bounds {
                Some(b) => Some(b),
                None => {
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        "Invalid weekStart. Expected YYYY-MM-DD",
                    );
                }
            }
        }
    };

    let db = state.db();
    let found = match student::Entity::find_by_id(student_id.as_str()).one(db).await {
        Ok(Some(s)) => s,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Student not found"),
        Err(e) => return internal_error("Error fetching student schedule", e),
    };

    let Some(course_id) = found.course_id else {
        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                Vec::<ScheduleEntry>::new(),
                "Student schedule retrieved successfully",
            )),
        )
            .into_response();
    };

    let mut select = event::Entity::find().filter(event::Column::CourseId.eq(course_id));
    if let Some((from, to)) = week {
        select = select
            .filter(event::Column::StartDate.gte(from))
            .filter(event::Column::StartDate.lt(to));
    }

    match select
        .find_also_related(course::Entity)
        .order_by_asc(event::Column::StartDate)
        .all(db)
        .await
    {
        Ok(rows) => {
            let items: Vec<ScheduleEntry> = rows
                .into_iter()
                .map(|pair| ScheduleEntry::from(CalendarEvent::from(pair)))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Student schedule retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error fetching student schedule", e),
    }
}

/// GET /calendar/deadlines?courseId=CSC101
///
/// Assignments that are not yet due, soonest first.
pub async fn deadlines(
    State(state): State<AppState>,
    Query(query): Query<DeadlineQuery>,
) -> Response {
    let mut select = assignment::Entity::find().filter(assignment::Column::Deadline.gte(Utc::now()));
    if let Some(course_id) = non_empty(query.course_id) {
        select = select.filter(assignment::Column::CourseId.eq(course_id));
    }

    match select
        .find_also_related(course::Entity)
        .order_by_asc(assignment::Column::Deadline)
        .all(state.db())
        .await
    {
        Ok(rows) => {
            let items: Vec<Deadline> = rows
                .into_iter()
                .map(|(assignment, course)| {
                    let (course_name, course_code) = match course {
                        Some(c) => (Some(c.course_name), Some(c.course_code)),
                        None => (None, None),
                    };
                    Deadline {
                        assignment,
                        course_name,
                        course_code,
                    }
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(items, "Deadlines retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => internal_error("Error fetching assignment deadlines", e),
    }
}
