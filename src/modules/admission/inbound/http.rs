// HTTP-facing admission helpers: caller identity resolution and the
// throttling response.

use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use crate::modules::admission::core::limiter::AdmissionDecision;
use crate::shared::http::responses::ErrorBody;

/// Fallback identifier when no caller address can be resolved. Admission
/// state must never be keyed by an empty string.
pub const ANONYMOUS_CALLER: &str = "anonymous";

/// Resolve the identifier admission state is tracked under: the first
/// forwarded address if present, else the real-address header, else the
/// anonymous sentinel.
pub fn resolve_caller(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }
    if let Some(real) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real = real.trim();
        if !real.is_empty() {
            return real.to_string();
        }
    }
    ANONYMOUS_CALLER.to_string()
}

/// Build the 429 response for a rejected decision, carrying the standard
/// rate-limit headers so clients know when to retry.
pub fn too_many_requests(decision: &AdmissionDecision) -> Response {
    let now_ms = Utc::now().timestamp_millis();
    let retry_after_secs = ((decision.reset_at - now_ms).max(0) + 999) / 1000;
    let reset = DateTime::from_timestamp_millis(decision.reset_at)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();

    (
        StatusCode::TOO_MANY_REQUESTS,
        [
            ("X-RateLimit-Limit", decision.limit.to_string()),
            ("X-RateLimit-Remaining", decision.remaining.to_string()),
            ("X-RateLimit-Reset", reset),
            ("Retry-After", retry_after_secs.to_string()),
        ],
        Json(ErrorBody::new("Too many requests. Please try again later.")),
    )
        .into_response()
}
