use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator};
use crate::modules::events::core::event::{Event, ORGANIZER_ID_FIELD, reserved_attribute};
use crate::shared::infrastructure::document_store::{Collection, DocumentStore, ID_FIELD};
use serde_json::{Map, Value};

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    /// Replaces payload fields of an event and returns the stored result.
    ///
    /// The organizer reference is not part of the payload: repeating the
    /// current organizer is accepted, naming another one is rejected.
    pub async fn update_event(
        &self,
        id: &str,
        mut changes: Map<String, Value>,
    ) -> Result<Event, CoordinatorError> {
        changes.remove(ID_FIELD);
        if let Some(field) = reserved_attribute(&changes) {
            return Err(CoordinatorError::ReservedAttribute { field });
        }
        if let Some(requested) = changes.remove(ORGANIZER_ID_FIELD) {
            let current = self.load_event(id).await?;
            if requested.as_str() != Some(current.organizer_id.as_str()) {
                return Err(CoordinatorError::OrganizerChangeForbidden {
                    event_id: current.id,
                    organizer_id: current.organizer_id,
                });
            }
        }

        let outcome = self
            .store
            .replace_fields(Collection::Events, id, changes)
            .await?;
        if outcome.is_unmatched() {
            return Err(CoordinatorError::event_not_found(id));
        }
        tracing::info!(event_id = %id, modified = outcome.modified, "event updated");

        self.load_event(id).await
    }
}
