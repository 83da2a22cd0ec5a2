use chrono::{DateTime, Datelike, Months, NaiveDate, Utc, Weekday};
use db::models::{assignment, course, event};
use serde::{Deserialize, Serialize};

pub const DEFAULT_UPCOMING_LIMIT: u64 = 10;
pub const MAX_UPCOMING_LIMIT: u64 = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthQuery {
    pub year: Option<String>,
    pub month: Option<String>,
    pub course_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    pub week_start: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineQuery {
    pub course_id: Option<String>,
}

/// An event joined with its course's name and code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(flatten)]
    pub event: event::Model,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
}

impl From<(event::Model, Option<course::Model>)> for CalendarEvent {
    fn from((event, course): (event::Model, Option<course::Model>)) -> Self {
        let (course_name, course_code) = match course {
            Some(c) => (Some(c.course_name), Some(c.course_code)),
            None => (None, None),
        };
        Self {
            event,
            course_name,
            course_code,
        }
    }
}

/// A calendar event with the weekday (1 = Sunday .. 7 = Saturday) and
/// time of day it starts at.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub day_of_week: u32,
    pub time: String,
}

impl From<CalendarEvent> for ScheduleEntry {
    fn from(event: CalendarEvent) -> Self {
        let start = event.event.start_date;
        Self {
            day_of_week: day_of_week(start.weekday()),
            time: start.format("%H:%M:%S").to_string(),
            event,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    #[serde(flatten)]
    pub assignment: assignment::Model,
    pub course_name: Option<String>,
    pub course_code: Option<String>,
}

pub fn day_of_week(weekday: Weekday) -> u32 {
    weekday.number_from_sunday()
}

/// `[first instant of the month, first instant of the next month)`.
pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some((
        first.and_hms_opt(0, 0, 0)?.and_utc(),
        next.and_hms_opt(0, 0, 0)?.and_utc(),
    ))
}

/// Parses `?limit=`, defaulting to 10 and capping at 100. `None` for
/// anything that is not a positive integer.
pub fn parse_limit(raw: Option<&str>) -> Option<u64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Some(DEFAULT_UPCOMING_LIMIT),
        Some(s) => match s.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(n.min(MAX_UPCOMING_LIMIT)),
        },
    }
}
