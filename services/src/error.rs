use crate::token::TokenError;
use sea_orm::DbErr;
use thiserror::Error;

/// Everything the attendance state machine can refuse with.
///
/// The display string is the message shown to the client; the HTTP layer
/// picks the status code per variant.
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// A required field is absent.
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Invalid class type. Must be \"physical\" or \"online\"")]
    InvalidClassType,
    #[error("Invalid date. Expected YYYY-MM-DD")]
    InvalidDate,
    #[error("Invalid attendance code")]
    InvalidCode,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Attendance session is closed")]
    SessionClosed,
    #[error("Attendance session has expired")]
    SessionExpired,
    #[error("Invalid attendance token")]
    TokenMismatch,
    #[error("Attendance already closed")]
    AlreadyClosed,
    #[error("No instance was found")]
    NoInstances,

    /// Coordinates were required but not supplied.
    #[error("{0}")]
    LocationRequired(&'static str),
    #[error("You must be within {radius}m of the classroom ({distance}m away)")]
    OutOfRange { radius: i64, distance: i64 },

    #[error("Attendance already marked")]
    AlreadyMarked,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("{0}")]
    Internal(String),
}
