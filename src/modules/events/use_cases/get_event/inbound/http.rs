use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::http::message;
use crate::shell::state::AppState;

/// Failures are reported as a `200` carrying a message body.
pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.events.get_event(&id).await {
        Ok(event) => Json(event).into_response(),
        Err(e) => message(StatusCode::OK, e.to_string()),
    }
}
