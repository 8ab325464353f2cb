//! Typed API error for HTTP handlers.
//!
//! Every failure leaves as JSON `{"message": "..."}` with a matching status.
//! `Internal` logs the real error server-side and only returns its static
//! message to the client.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bankdash_core::bank_details::FieldErrors;

/// Generic message for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Message accompanying per-field validation errors.
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed or incomplete input.
    BadRequest(String),
    /// 401 Unauthorized: credentials did not match.
    Unauthorized(String),
    /// 415 Unsupported Media Type: body was not JSON.
    UnsupportedMediaType(String),
    /// 400 Bad Request with per-field messages.
    Validation(FieldErrors),
    /// 500 Internal Server Error: details logged, not exposed.
    Internal { source: anyhow::Error, message: &'static str },
}

impl ApiError {
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { source: source.into(), message: INTERNAL_ERROR_MESSAGE }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::UnsupportedMediaType(msg) => {
                serde_json::json!({ "message": msg })
            },
            Self::Validation(errors) => {
                serde_json::json!({ "message": VALIDATION_MESSAGE, "errors": errors })
            },
            Self::Internal { source, message } => {
                tracing::error!(error = ?source, "internal server error");
                serde_json::json!({ "message": message })
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::UnsupportedMediaType("Invalid Content-Type. Expected application/json.".to_owned())
            },
            other => Self::BadRequest(format!("Invalid JSON in request body. {}", other.body_text())),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err)
    }
}
