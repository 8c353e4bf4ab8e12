// Organizer management surface.
//
// Owns organizer records: creates them with an empty event list and reads
// them back. Entries in the event list are maintained by the event
// operations only, so nothing here edits them.

use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("organizer not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct OrganizerDirectory<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub(crate) store: Arc<TStore>,
}

impl<TStore> OrganizerDirectory<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }
}
