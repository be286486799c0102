use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::admission::inbound::http::{resolve_caller, too_many_requests};
use crate::modules::events::core::ports::StoreError;
use crate::modules::events::core::record::{EventPayload, EventRecord};
use crate::modules::events::core::validate::validate_event;
use crate::shared::http::responses::{ErrorBody, internal_error};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    pub event: EventRecord,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<EventPayload>, JsonRejection>,
) -> Response {
    let caller = resolve_caller(&headers);
    let decision = state.limiter.check(&state.create_policy, &caller).await;
    if !decision.admitted {
        tracing::warn!(%caller, "event creation throttled");
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

    let now = Utc::now().timestamp_millis();
    if let Err(details) = validate_event(&payload, now) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_details("Validation failed", details)),
        )
            .into_response();
    }

    let record = EventRecord {
        id: Uuid::now_v7().to_string(),
        data: payload,
        created_at: now,
    };

    match state.store.create(record.clone()).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(CreateEventResponse {
                success: true,
                event: record,
            }),
        )
            .into_response(),
        Err(StoreError::DuplicateId(_)) => (
            StatusCode::CONFLICT,
            Json(ErrorBody::new("Event already exists")),
        )
            .into_response(),
        Err(err) => internal_error(
            "Failed to create event",
            &err.to_string(),
            state.environment.is_development(),
        ),
    }
}
