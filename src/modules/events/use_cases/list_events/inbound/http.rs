use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::core::record::EventRecord;
use crate::shared::http::responses::internal_error;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<EventRecord>,
    pub count: usize,
}

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.store.get_all().await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(ListEventsResponse { events, count })).into_response()
        }
        Err(err) => internal_error(
            "Failed to fetch events",
            &err.to_string(),
            state.environment.is_development(),
        ),
    }
}
