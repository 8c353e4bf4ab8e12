use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator};
use crate::modules::events::core::event::{EnrichedEvent, Event};
use crate::modules::events::core::organizer_summary::OrganizerSummary;
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};
use std::collections::HashMap;

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    /// All events in store order, each with its organizer. Organizers are read
    /// once for the whole listing.
    pub async fn list_events(&self) -> Result<Vec<EnrichedEvent>, CoordinatorError> {
        let documents = self.store.find_all(Collection::Events).await?;
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let organizers: HashMap<String, OrganizerSummary> = self
            .store
            .find_all(Collection::Organizers)
            .await?
            .iter()
            .filter_map(OrganizerSummary::from_document)
            .map(|summary| (summary.id.clone(), summary))
            .collect();

        documents
            .into_iter()
            .map(|document| -> Result<EnrichedEvent, CoordinatorError> {
                let event = Event::from_document(document)?;
                let organizer = organizers.get(&event.organizer_id).cloned();
                Ok(EnrichedEvent { event, organizer })
            })
            .collect()
    }
}
