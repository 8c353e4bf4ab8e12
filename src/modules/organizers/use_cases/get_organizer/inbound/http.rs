use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::organizers::directory::OrganizerError;
use crate::shared::http::message;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.organizers.get_organizer(&id).await {
        Ok(organizer) => Json(organizer).into_response(),
        Err(e @ OrganizerError::NotFound(_)) => message(StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
