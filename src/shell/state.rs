use crate::modules::events::coordinator::{EventCoordinator, OrphanPolicy};
use crate::modules::organizers::directory::OrganizerDirectory;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventCoordinator<InMemoryDocumentStore>>,
    pub organizers: Arc<OrganizerDirectory<InMemoryDocumentStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryDocumentStore>, orphan_policy: OrphanPolicy) -> Self {
        Self {
            events: Arc::new(EventCoordinator::new(store.clone(), orphan_policy)),
            organizers: Arc::new(OrganizerDirectory::new(store)),
        }
    }
}
