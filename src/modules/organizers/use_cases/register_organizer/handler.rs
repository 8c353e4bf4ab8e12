use crate::modules::organizers::core::organizer::{NewOrganizer, Organizer};
use crate::modules::organizers::directory::{OrganizerDirectory, OrganizerError};
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};

impl<TStore> OrganizerDirectory<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub async fn register_organizer(
        &self,
        new_organizer: NewOrganizer,
    ) -> Result<Organizer, OrganizerError> {
        let NewOrganizer {
            first_name,
            last_name,
            email,
        } = new_organizer.clone();
        let id = self
            .store
            .insert(Collection::Organizers, new_organizer.into_document())
            .await?;
        tracing::info!(organizer_id = %id, "organizer registered");
        Ok(Organizer {
            id,
            first_name,
            last_name,
            email,
            events: Vec::new(),
        })
    }
}
