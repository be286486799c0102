// Shared HTTP error envelope.
//
// Purpose
// - Keep the error body shape identical across handlers: `error` always,
//   `message` on internal failures, `details` on validation failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::core::validate::FieldError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: Some(details),
        }
    }
}

/// Build a 500 response. The underlying error text is only exposed in the
/// development environment; production callers get a generic message.
pub fn internal_error(action: &str, detail: &str, development: bool) -> Response {
    let message = if development {
        detail.to_string()
    } else {
        "An error occurred".to_string()
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: action.to_string(),
            message: Some(message),
            details: None,
        }),
    )
        .into_response()
}
