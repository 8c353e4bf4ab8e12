use async_graphql::{Context, Json, Object, Result as GqlResult, SimpleObject};
use serde_json::{Map, Value};

use crate::modules::events::core::event::{EnrichedEvent, Event, NewEvent};
use crate::modules::events::core::organizer_summary::OrganizerSummary;
use crate::modules::events::use_cases::delete_all_events::handler::BulkDeletion;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlOrganizerSummary {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<OrganizerSummary> for GqlOrganizerSummary {
    fn from(v: OrganizerSummary) -> Self {
        Self {
            id: v.id,
            first_name: v.first_name,
            last_name: v.last_name,
            email: v.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub organizer_id: String,
    pub attributes: Json<Map<String, Value>>,
    pub organizer: Option<GqlOrganizerSummary>,
}

impl From<EnrichedEvent> for GqlEvent {
    fn from(v: EnrichedEvent) -> Self {
        Self {
            organizer: v.organizer.map(Into::into),
            ..v.event.into()
        }
    }
}

impl From<Event> for GqlEvent {
    fn from(v: Event) -> Self {
        Self {
            id: v.id,
            organizer_id: v.organizer_id,
            attributes: Json(v.attributes),
            organizer: None,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBulkDeletion {
    pub deleted_count: u64,
    pub deleted_ids: Vec<String>,
    /// False when organizers may still list some of the deleted ids.
    pub unlink_complete: bool,
}

impl From<BulkDeletion> for GqlBulkDeletion {
    fn from(v: BulkDeletion) -> Self {
        Self {
            deleted_count: v.deleted_count as u64,
            unlink_complete: v.is_complete(),
            deleted_ids: v.deleted_ids,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn event(&self, context: &Context<'_>, id: String) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.get_event(&id).await?.into())
    }

    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.events.list_events().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_event(
        &self,
        context: &Context<'_>,
        organizer_id: String,
        attributes: Option<Json<Map<String, Value>>>,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let new_event = NewEvent {
            organizer_id,
            attributes: attributes.map(|Json(a)| a).unwrap_or_default(),
        };
        Ok(state.events.create_event(new_event).await?.into())
    }

    async fn update_event(
        &self,
        context: &Context<'_>,
        id: String,
        attributes: Json<Map<String, Value>>,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.update_event(&id, attributes.0).await?.into())
    }

    /// Returns the id of the deleted event.
    async fn delete_event(&self, context: &Context<'_>, id: String) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.delete_event(&id).await?.event_id)
    }

    async fn delete_all_events(&self, context: &Context<'_>) -> GqlResult<GqlBulkDeletion> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.events.delete_all_events().await?.into())
    }
}
