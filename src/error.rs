//! Application error taxonomy and HTTP rendering.
//!
//! Every error surfacing at the API boundary is rendered as the uniform JSON
//! envelope `{"status": "error", "statusCode": <u16>, "message": <string>}`.
//! Store driver details never reach the wire; they are logged instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    #[serde(rename = "statusCode")]
    status_code: u16,
    message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input. Always client-caused, always 400.
    #[error("{message}")]
    Validation { message: String },

    /// No live record matches. 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Code-generation collision retries exhausted. Surfaced as 500: with a
    /// 64^6 code space this signals a capacity problem, not a bad request.
    #[error("{message}")]
    ExhaustedRetries { message: String },

    /// Any store failure not recognized as a code collision. 500, never
    /// silently swallowed.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn exhausted_retries(message: impl Into<String>) -> Self {
        Self::ExhaustedRetries {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::ExhaustedRetries { message } => {
                tracing::error!(%message, "short code retries exhausted");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = ErrorBody {
            status: "error",
            status_code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AppError::bad_request("bad"), StatusCode::BAD_REQUEST),
            (AppError::not_found("missing"), StatusCode::NOT_FOUND),
            (
                AppError::exhausted_retries("collisions"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_envelope_shape() {
        let body = ErrorBody {
            status: "error",
            status_code: 400,
            message: "bad input".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "bad input");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("The url field is required.");
        assert_eq!(err.to_string(), "The url field is required.");
    }
}
