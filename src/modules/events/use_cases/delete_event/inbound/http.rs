use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::coordinator::CoordinatorError;
use crate::shared::http::message;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.events.delete_event(&id).await {
        Ok(_) => message(StatusCode::OK, "Event deleted successfully"),
        Err(CoordinatorError::NotFound { .. }) => message(StatusCode::NOT_FOUND, "Event not found"),
        Err(CoordinatorError::DanglingReference { .. }) => message(
            StatusCode::NOT_FOUND,
            "Organizer not found or event not associated",
        ),
        Err(e) => message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
