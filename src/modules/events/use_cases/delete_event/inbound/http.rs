use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::http::responses::{ErrorBody, internal_error};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub message: String,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.remove(&id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(DeleteEventResponse {
                success: true,
                message: "Event deleted".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Event not found")),
        )
            .into_response(),
        Err(err) => internal_error(
            "Failed to delete event",
            &err.to_string(),
            state.environment.is_development(),
        ),
    }
}
