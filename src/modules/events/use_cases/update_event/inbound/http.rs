use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::admission::inbound::http::{resolve_caller, too_many_requests};
use crate::modules::events::core::record::EventPayload;
use crate::modules::events::core::validate::validate_event;
use crate::shared::http::responses::{ErrorBody, internal_error};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UpdateEventResponse {
    pub success: bool,
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<EventPayload>, JsonRejection>,
) -> Response {
    let caller = resolve_caller(&headers);
    let decision = state.limiter.check(&state.update_policy, &caller).await;
    if !decision.admitted {
        tracing::warn!(%caller, "event update throttled");
        return too_many_requests(&decision);
    }

    let Json(payload) = match body {
        Ok(body) => body,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("Invalid request body")),
            )
                .into_response();
        }
    };

    if let Err(details) = validate_event(&payload, Utc::now().timestamp_millis()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_details("Validation failed", details)),
        )
            .into_response();
    }

    match state.store.update(&id, payload).await {
        Ok(true) => (
            StatusCode::OK,
            Json(UpdateEventResponse {
                success: true,
                message: "Event updated".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Event not found")),
        )
            .into_response(),
        Err(err) => internal_error(
            "Failed to update event",
            &err.to_string(),
            state.environment.is_development(),
        ),
    }
}
