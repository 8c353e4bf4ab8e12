use crate::modules::organizers::core::organizer::Organizer;
use crate::modules::organizers::directory::{OrganizerDirectory, OrganizerError};
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};

impl<TStore> OrganizerDirectory<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub async fn get_organizer(&self, id: &str) -> Result<Organizer, OrganizerError> {
        let document = self
            .store
            .find_by_id(Collection::Organizers, id)
            .await?
            .ok_or_else(|| OrganizerError::NotFound(id.to_string()))?;
        Ok(Organizer::from_document(document)?)
    }
}
