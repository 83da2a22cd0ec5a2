use db::models::{assignment, attendance_record::AttendanceStatus, event};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RECENT_LIMIT: u64 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_students: u64,
    pub total_courses: u64,
    pub total_assignments: u64,
    pub total_events: u64,
    pub recent_assignments: Vec<assignment::Model>,
    pub recent_events: Vec<event::Model>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportQuery {
    pub course_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendance {
    pub student_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_sessions: u64,
    pub present_sessions: u64,
    pub attendance_percentage: f64,
}

/// `part / whole` as a percentage rounded to two decimals; `0.0` when
/// `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 10_000.0 / whole as f64).round() / 100.0
}

/// Per-student `(total, present)` counts, keyed by student id.
pub fn tally<'a>(
    records: impl IntoIterator<Item = (&'a str, AttendanceStatus)>,
) -> BTreeMap<String, (u64, u64)> {
    let mut totals: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for (student_id, status) in records {
        let entry = totals.entry(student_id.to_owned()).or_default();
        entry.0 += 1;
        if status == AttendanceStatus::Present {
            entry.1 += 1;
        }
    }
    totals
}
