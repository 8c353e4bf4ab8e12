use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator};
use crate::modules::organizers::core::organizer::EVENTS_FIELD;
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDeleted {
    pub event_id: String,
    pub organizer_id: String,
}

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    /// Unlinks the event from its organizer, then deletes the record.
    ///
    /// The record is only deleted once the organizer is known to no longer list
    /// it. An organizer that exists but no longer lists the event counts as
    /// already unlinked, so a retry after a failure between the two steps
    /// completes the deletion. That failure itself leaves an unlinked record
    /// behind until the retry.
    pub async fn delete_event(&self, id: &str) -> Result<EventDeleted, CoordinatorError> {
        let event = self.load_event(id).await?;

        let outcome = self
            .store
            .remove_from_array_field(
                Collection::Organizers,
                &event.organizer_id,
                EVENTS_FIELD,
                &Value::String(event.id.clone()),
            )
            .await?;
        if outcome.is_unmatched() {
            tracing::warn!(event_id = %event.id, organizer_id = %event.organizer_id, "organizer not found, event left in place");
            return Err(CoordinatorError::DanglingReference {
                event_id: event.id,
                organizer_id: event.organizer_id,
                event_retained: true,
            });
        }
        if outcome.modified == 0 {
            tracing::warn!(event_id = %event.id, organizer_id = %event.organizer_id, "event was already unlinked from its organizer");
        }

        let deleted = match self.store.delete_by_id(Collection::Events, &event.id).await {
            Ok(deleted) => deleted,
            Err(error) => {
                tracing::warn!(event_id = %event.id, organizer_id = %event.organizer_id, %error, "event unlinked but its record was not deleted");
                return Err(error.into());
            }
        };
        if !deleted {
            return Err(CoordinatorError::event_not_found(&event.id));
        }

        tracing::info!(event_id = %event.id, organizer_id = %event.organizer_id, "event deleted");
        Ok(EventDeleted {
            event_id: event.id,
            organizer_id: event.organizer_id,
        })
    }
}
