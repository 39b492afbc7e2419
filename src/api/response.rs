//! Response types for the hours engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// 400 with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// 401: the caller could not be identified.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::new("UNAUTHENTICATED", message),
        }
    }

    /// 403: the caller's role may not use this endpoint.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: ApiError::new("FORBIDDEN", message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchoolYear { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHOOL_YEAR",
                    "Invalid school year format",
                    format!("'{}': {}", value, message),
                ),
            },
            EngineError::InvalidUserId { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_USER_ID",
                    "Invalid user ID",
                    format!("'{}' is not a numeric user ID", value),
                ),
            },
            EngineError::InvalidInterval { date, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    format!("Invalid interval on {}", date),
                    message,
                ),
            },
            EngineError::DataAccess { message } => {
                // Store internals stay in the log, not the response body.
                warn!(error = %message, "Attendance store failure");
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("DATA_ACCESS_ERROR", "Internal server error"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_school_year_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidSchoolYear {
            value: "2023".to_string(),
            message: "expected format YYYY-YYYY".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SCHOOL_YEAR");
        assert_eq!(api_error.error.message, "Invalid school year format");
    }

    #[test]
    fn test_invalid_user_id_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidUserId {
            value: String::new(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_USER_ID");
    }

    #[test]
    fn test_invalid_interval_maps_to_unprocessable() {
        let api_error: ApiErrorResponse = EngineError::InvalidInterval {
            date: NaiveDate::from_ymd_opt(2023, 9, 4).unwrap(),
            message: "exit time 09:00:00 is before entry time 17:00:00".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.message, "Invalid interval on 2023-09-04");
    }

    #[test]
    fn test_data_access_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::DataAccess {
            message: "down".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "DATA_ACCESS_ERROR");
    }

    #[test]
    fn test_data_access_hides_store_message() {
        let api_error: ApiErrorResponse = EngineError::DataAccess {
            message: "connection refused to db-primary:5432".to_string(),
        }
        .into();
        assert_eq!(api_error.error.message, "Internal server error");
        assert!(api_error.error.details.is_none());

        let json = serde_json::to_string(&api_error.error).unwrap();
        assert!(!json.contains("db-primary"));
    }
}
