use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Human readable description of the failure.
    pub message: String,
    /// Numeric HTTP status code.
    pub status: u16,
    /// HTTP reason phrase matching `status`.
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorDto {
    /// Builds an error body for `status`, stamped with the current time.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            timestamp: Utc::now(),
        }
    }
}
