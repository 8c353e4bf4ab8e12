use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_all_events::inbound::http as delete_all_events_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::organizers::use_cases::get_organizer::inbound::http as get_organizer_http;
use crate::modules::organizers::use_cases::register_organizer::inbound::http as register_organizer_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/events",
            post(create_event_http::handle)
                .get(list_events_http::handle)
                .delete(delete_all_events_http::handle),
        )
        .route(
            "/events/{id}",
            get(get_event_http::handle)
                .put(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route("/organizers", post(register_organizer_http::handle))
        .route("/organizers/{id}", get(get_organizer_http::handle))
        .with_state(state)
}
