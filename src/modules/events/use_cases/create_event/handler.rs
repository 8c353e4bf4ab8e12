use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator, OrphanPolicy};
use crate::modules::events::core::event::{Event, NewEvent, reserved_attribute};
use crate::modules::organizers::core::organizer::EVENTS_FIELD;
use crate::shared::infrastructure::document_store::{Collection, DocumentStore, ID_FIELD};
use serde_json::Value;

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    /// Inserts the event, then appends its id to the organizer's event list.
    ///
    /// A missing organizer yields `DanglingReference`; depending on the orphan
    /// policy the inserted event is either kept unlinked or deleted again.
    /// The returned event mirrors the stored document.
    pub async fn create_event(&self, new_event: NewEvent) -> Result<Event, CoordinatorError> {
        if let Some(field) = reserved_attribute(&new_event.attributes) {
            return Err(CoordinatorError::ReservedAttribute { field });
        }
        let organizer_id = new_event.organizer_id.clone();
        let document = new_event.into_document();
        let event_id = self
            .store
            .insert(Collection::Events, document.clone())
            .await?;

        let outcome = match self
            .store
            .append_to_array_field(
                Collection::Organizers,
                &organizer_id,
                EVENTS_FIELD,
                Value::String(event_id.clone()),
            )
            .await
        {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(%event_id, %organizer_id, %error, "event stored but not linked to its organizer");
                return Err(error.into());
            }
        };

        if outcome.is_unmatched() {
            let event_retained = match self.orphan_policy {
                OrphanPolicy::Retain => {
                    tracing::warn!(%event_id, %organizer_id, "organizer not found, event kept unlinked");
                    true
                }
                OrphanPolicy::Compensate => self.discard_orphan(&event_id, &organizer_id).await,
            };
            return Err(CoordinatorError::DanglingReference {
                event_id,
                organizer_id,
                event_retained,
            });
        }

        tracing::info!(%event_id, %organizer_id, "event created and linked");
        let mut stored = document;
        stored.insert(ID_FIELD.to_string(), Value::String(event_id));
        Ok(Event::from_document(stored)?)
    }

    /// Deletes an event whose link step found no organizer. Returns whether the
    /// event is still stored afterwards.
    async fn discard_orphan(&self, event_id: &str, organizer_id: &str) -> bool {
        match self.store.delete_by_id(Collection::Events, event_id).await {
            Ok(_) => {
                tracing::info!(%event_id, %organizer_id, "organizer not found, event discarded");
                false
            }
            Err(error) => {
                tracing::error!(%event_id, %organizer_id, %error, "failed to discard unlinked event");
                true
            }
        }
    }
}
