use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::http::message;
use crate::shell::state::AppState;

/// Answers `200` once the events are gone. The body's `unlink` field tells
/// whether organizers were cleaned up as well.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.events.delete_all_events().await {
        Ok(deletion) => Json(deletion).into_response(),
        Err(e) => message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
