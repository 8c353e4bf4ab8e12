use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::coordinator::CoordinatorError;
use crate::modules::events::core::event::NewEvent;
use crate::shared::http::message;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct OrganizerNotFoundResponse {
    pub message: String,
    pub event_id: String,
    pub event_retained: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.events.create_event(body).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(CoordinatorError::DanglingReference {
            event_id,
            event_retained,
            ..
        }) => (
            StatusCode::NOT_FOUND,
            Json(OrganizerNotFoundResponse {
                message: "Organizer not found".to_string(),
                event_id,
                event_retained,
            }),
        )
            .into_response(),
        Err(e @ CoordinatorError::ReservedAttribute { .. }) => {
            message(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Err(e) => message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
