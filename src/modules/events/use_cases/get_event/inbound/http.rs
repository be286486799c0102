use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::core::record::EventRecord;
use crate::shared::http::responses::{ErrorBody, internal_error};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GetEventResponse {
    pub event: EventRecord,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_by_id(&id).await {
        Ok(Some(event)) => (StatusCode::OK, Json(GetEventResponse { event })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Event not found")),
        )
            .into_response(),
        Err(err) => internal_error(
            "Failed to fetch event",
            &err.to_string(),
            state.environment.is_development(),
        ),
    }
}
