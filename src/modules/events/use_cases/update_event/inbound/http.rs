use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::modules::events::coordinator::CoordinatorError;
use crate::shared::http::message;
use crate::shell::state::AppState;

/// A missing event or a store failure is reported as a `200` carrying a
/// message body; an attempt to move the event to another organizer is a `409`
/// and a reserved attribute a `422`.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.events.update_event(&id, body).await {
        Ok(event) => Json(event).into_response(),
        Err(e @ CoordinatorError::OrganizerChangeForbidden { .. }) => {
            message(StatusCode::CONFLICT, e.to_string())
        }
        Err(e @ CoordinatorError::ReservedAttribute { .. }) => {
            message(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Err(e) => message(StatusCode::OK, e.to_string()),
    }
}
