use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator};
use crate::modules::events::core::event::EnrichedEvent;
use crate::shared::infrastructure::document_store::DocumentStore;

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    pub async fn get_event(&self, id: &str) -> Result<EnrichedEvent, CoordinatorError> {
        let event = self.load_event(id).await?;
        self.enrich(event).await
    }
}

#[cfg(test)]
mod get_event_handler_tests {
    use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator, OrphanPolicy};
    use crate::shared::infrastructure::document_store::in_memory::{
        InMemoryDocumentStore, StoreOperation,
    };
    use crate::tests::fixtures::events::NewEventBuilder;
    use crate::tests::fixtures::organizers::seed_organizer;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_event_with_its_organizer() {
        let store = InMemoryDocumentStore::new();
        let organizer_id = seed_organizer(&store).await;
        let coordinator = EventCoordinator::new(Arc::new(store), OrphanPolicy::Retain);
        let created = coordinator
            .create_event(
                NewEventBuilder::new()
                    .organizer_id(&organizer_id)
                    .title("Launch")
                    .attribute("date", "2026-11-02")
                    .build(),
            )
            .await
            .unwrap();

        let enriched = coordinator.get_event(&created.id).await.expect("get failed");

        assert_eq!(enriched.event, created);
        let organizer = enriched.organizer.expect("organizer missing");
        assert_eq!(organizer.id, organizer_id);
        assert_eq!(organizer.first_name.as_deref(), Some("Ada"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_orphan_without_organizer() {
        let coordinator =
            EventCoordinator::new(Arc::new(InMemoryDocumentStore::new()), OrphanPolicy::Retain);
        let event_id = match coordinator
            .create_event(NewEventBuilder::new().organizer_id("ghost").build())
            .await
        {
            Err(CoordinatorError::DanglingReference { event_id, .. }) => event_id,
            other => panic!("expected dangling reference, got {other:?}"),
        };

        let enriched = coordinator.get_event(&event_id).await.expect("get failed");

        assert_eq!(enriched.event.organizer_id, "ghost");
        assert!(enriched.organizer.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_with_not_found_for_an_unknown_id() {
        let coordinator =
            EventCoordinator::new(Arc::new(InMemoryDocumentStore::new()), OrphanPolicy::Retain);
        assert!(matches!(
            coordinator.get_event("missing").await,
            Err(CoordinatorError::NotFound { .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_lookup_fails() {
        let mut store = InMemoryDocumentStore::new();
        store.fail_on(StoreOperation::FindById);
        let coordinator = EventCoordinator::new(Arc::new(store), OrphanPolicy::Retain);
        assert!(matches!(
            coordinator.get_event("e1").await,
            Err(CoordinatorError::Store(_))
        ));
    }
}
