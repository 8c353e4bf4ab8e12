use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::http::message;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.list_events().await {
        Ok(events) => Json(events).into_response(),
        Err(e) => message(StatusCode::OK, e.to_string()),
    }
}
