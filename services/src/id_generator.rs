//! Human-readable identifiers of the form `PREFIX-000123`.
//!
//! Each prefix owns a counter row in `id_sequences`. The counter is bumped
//! with a single upsert so concurrent callers never observe the same value.

use sea_orm::{ConnectionTrait, DbErr, Statement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Lecturer,
    Group,
    Assignment,
    Event,
    Notification,
    Feedback,
    Conversation,
    Message,
    AttendanceInstance,
    AttendanceRecord,
}

impl IdPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            IdPrefix::Lecturer => "LEC",
            IdPrefix::Group => "GRP",
            IdPrefix::Assignment => "ASG",
            IdPrefix::Event => "EVT",
            IdPrefix::Notification => "NTF",
            IdPrefix::Feedback => "FDB",
            IdPrefix::Conversation => "CNV",
            IdPrefix::Message => "MSG",
            IdPrefix::AttendanceInstance => "ATT_INT",
            IdPrefix::AttendanceRecord => "ATT",
        }
    }
}

const NEXT_VALUE_SQL: &str = "INSERT INTO id_sequences (prefix, value) VALUES (?, 1) \
     ON CONFLICT(prefix) DO UPDATE SET value = value + 1 \
     RETURNING value";

/// Allocates the next identifier for `prefix`.
///
/// Runs on whatever connection is passed in, so calling it inside a
/// transaction rolls the counter back together with the rest of the work.
pub async fn next_id<C: ConnectionTrait>(db: &C, prefix: IdPrefix) -> Result<String, DbErr> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        NEXT_VALUE_SQL,
        [prefix.as_str().into()],
    );

    let row = db
        .query_one(stmt)
        .await?
        .ok_or_else(|| DbErr::Custom(format!("no sequence value for {}", prefix.as_str())))?;
    let value: i64 = row.try_get("", "value")?;

    Ok(format_id(prefix, value))
}

pub fn format_id(prefix: IdPrefix, value: i64) -> String {
    format!("{}-{:06}", prefix.as_str(), value)
}
