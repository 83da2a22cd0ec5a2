use serde::Serialize;

/// Envelope shared by every endpoint.
///
/// ```json
/// {
///   "success": true,
///   "data": { "studentId": "S1", "name": "Ada" },
///   "message": "Student retrieved successfully"
/// }
/// ```
///
/// Error responses carry `T::default()` as `data` (usually `null`) and
/// repeat the message under `error`, which is the key clients read on
/// failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        let message = message.into();
        Self {
            success: false,
            data: T::default(),
            error: Some(message.clone()),
            message,
        }
    }
}
