// Keeps the two halves of the event/organizer link consistent.
//
// An event points at its organizer through `organizer_id`; the organizer lists
// its events under `events`. The store offers no transaction spanning both
// records, so every mutating operation is an ordered sequence of store calls.
// When a later step fails, the operation ends in an explicit, reported state
// instead of rolling back. Each operation lives in its use case module as an
// `impl` block on `EventCoordinator`.

use crate::modules::events::core::event::{EnrichedEvent, Event};
use crate::modules::events::core::organizer_summary::OrganizerSummary;
use crate::shared::infrastructure::document_store::{Collection, DocumentStore, StoreError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("organizer {organizer_id} not found or not linked to event {event_id}")]
    DanglingReference {
        event_id: String,
        organizer_id: String,
        /// Whether the event record still exists after the failed link step.
        event_retained: bool,
    },

    #[error("event {event_id} belongs to organizer {organizer_id} and cannot be moved by an update")]
    OrganizerChangeForbidden {
        event_id: String,
        organizer_id: String,
    },

    #[error("`{field}` is reserved and cannot be stored as an event attribute")]
    ReservedAttribute { field: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoordinatorError {
    pub(crate) fn event_not_found(id: &str) -> Self {
        CoordinatorError::NotFound {
            entity: "event",
            id: id.to_string(),
        }
    }
}

/// What CreateEvent does with an event whose organizer turned out to be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Keep the unlinked event and report it.
    #[default]
    Retain,
    /// Delete the unlinked event again before reporting.
    Compensate,
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanPolicy::Retain => f.write_str("retain"),
            OrphanPolicy::Compensate => f.write_str("compensate"),
        }
    }
}

impl FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(OrphanPolicy::Retain),
            "compensate" => Ok(OrphanPolicy::Compensate),
            other => Err(format!("unknown orphan policy `{other}`")),
        }
    }
}

pub struct EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub(crate) store: Arc<TStore>,
    pub(crate) orphan_policy: OrphanPolicy,
}

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, orphan_policy: OrphanPolicy) -> Self {
        Self {
            store,
            orphan_policy,
        }
    }

    pub(crate) async fn load_event(&self, id: &str) -> Result<Event, CoordinatorError> {
        let document = self
            .store
            .find_by_id(Collection::Events, id)
            .await?
            .ok_or_else(|| CoordinatorError::event_not_found(id))?;
        Ok(Event::from_document(document)?)
    }

    pub(crate) async fn enrich(&self, event: Event) -> Result<EnrichedEvent, CoordinatorError> {
        let organizer = self
            .store
            .find_by_id(Collection::Organizers, &event.organizer_id)
            .await?
            .as_ref()
            .and_then(OrganizerSummary::from_document);
        Ok(EnrichedEvent { event, organizer })
    }
}
