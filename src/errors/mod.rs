/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("External API error: {0}")]
    ExternalApi(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status. `message` is the reason phrase.
    #[error("Upstream request failed: {message}")]
    UpstreamStatus { status: u16, message: String },
    #[error("Upstream returned an empty body")]
    EmptyBody,
    #[error("Malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Short machine-readable code used in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ExternalApi(e) => e
                .status()
                .map(|s| upstream_code(s.as_u16()))
                .unwrap_or("UPSTREAM_ERROR"),
            ApiError::UpstreamStatus { status, .. } => upstream_code(*status),
            ApiError::EmptyBody => "UPSTREAM_EMPTY",
            ApiError::Decode(_) => "UPSTREAM_DECODE",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

fn upstream_code(status: u16) -> &'static str {
    match status {
        403 => "UPSTREAM_403",
        404 => "UPSTREAM_404",
        429 => "UPSTREAM_429",
        500..=599 => "UPSTREAM_5XX",
        _ => "UPSTREAM_ERROR",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        // Failures travel in the envelope, the transport status stays 200
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_codes() {
        let err = ApiError::UpstreamStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.code(), "UPSTREAM_5XX");
        assert_eq!(
            err.to_string(),
            "Upstream request failed: Service Unavailable"
        );

        let err = ApiError::UpstreamStatus {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(err.code(), "UPSTREAM_429");
    }

    #[test]
    fn test_local_error_codes() {
        assert_eq!(ApiError::NotFound("planet 42".into()).code(), "NOT_FOUND");
        assert_eq!(ApiError::EmptyBody.code(), "UPSTREAM_EMPTY");
        assert_eq!(
            ApiError::InvalidInput("sort".into()).to_string(),
            "Invalid input: sort"
        );
    }
}
