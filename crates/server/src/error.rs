// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use timetrail_core::{AnalyticsError, RecordError};
use timetrail_db::DbError;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid session: {0}")]
    InvalidSession(#[from] RecordError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Aggregation failed: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidSession(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Analytics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match &self {
            ApiError::InvalidSession(record_err) => {
                tracing::warn!(error = %record_err, "Rejected malformed session");
                ErrorResponse::with_details("Invalid session", record_err.to_string())
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                let message = match db_err {
                    DbError::CorruptRow { .. } => "Corrupt session data",
                    _ => "Database error",
                };
                ErrorResponse::with_details(message, db_err.to_string())
            }
            ApiError::Analytics(analytics_err) => {
                tracing::error!(error = %analytics_err, "Chart aggregation failed");
                ErrorResponse::with_details("Aggregation failed", analytics_err.to_string())
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                ErrorResponse::with_details("Bad request", msg.clone())
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_invalid_session_returns_400() {
        let error = ApiError::InvalidSession(RecordError::NegativeDuration(-5));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid session");
        assert!(body.details.unwrap().contains("-5"));
    }

    #[tokio::test]
    async fn test_corrupt_row_returns_500() {
        let error = ApiError::Database(DbError::CorruptRow {
            id: 7,
            source: RecordError::EmptyProjectName,
        });
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Corrupt session data");
        assert!(body.details.unwrap().contains("Stored session 7"));
    }

    #[tokio::test]
    async fn test_other_database_error_returns_500() {
        let error = ApiError::Database(DbError::NoCacheDir);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Database error");
    }

    #[tokio::test]
    async fn test_analytics_error_returns_500() {
        let error = ApiError::Analytics(AnalyticsError::EmptyWeekSpan);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Aggregation failed");
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_bad_request_returns_400() {
        let error = ApiError::BadRequest("missing field".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.details.as_deref(), Some("missing field"));
    }

    #[tokio::test]
    async fn test_duration_overflow_returns_500() {
        let error = ApiError::Analytics(AnalyticsError::DurationOverflow);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.details.unwrap().contains("overflow"));
    }

    #[tokio::test]
    async fn test_oversized_session_returns_400() {
        let error = ApiError::InvalidSession(RecordError::DurationTooLarge(86_401));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.unwrap().contains("86401"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details"));

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }

    #[test]
    fn test_api_error_from_record_error() {
        let api_err: ApiError = RecordError::EmptyProjectName.into();
        assert!(matches!(api_err, ApiError::InvalidSession(_)));
        assert_eq!(api_err.to_string(), "Invalid session: Project name must not be empty");
    }
}
