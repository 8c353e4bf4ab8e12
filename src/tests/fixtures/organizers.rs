// Shared test fixtures for organizers.

use crate::modules::organizers::core::organizer::{EVENTS_FIELD, NewOrganizer};
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};
use serde_json::Value;

pub struct NewOrganizerBuilder {
    inner: NewOrganizer,
}

impl Default for NewOrganizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewOrganizerBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewOrganizer {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> NewOrganizer {
        self.inner
    }
}

/// Stores a default organizer with an empty event list and returns its id.
pub async fn seed_organizer<S: DocumentStore + ?Sized>(store: &S) -> String {
    store
        .insert(
            Collection::Organizers,
            NewOrganizerBuilder::new().build().into_document(),
        )
        .await
        .expect("failed to seed organizer")
}

/// Event ids currently listed by the organizer, read straight from the store.
pub async fn organizer_events<S: DocumentStore + ?Sized>(store: &S, id: &str) -> Vec<String> {
    let document = store
        .find_by_id(Collection::Organizers, id)
        .await
        .expect("failed to read organizer")
        .expect("organizer missing");
    document
        .get(EVENTS_FIELD)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod new_organizer_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NewOrganizerBuilder::new()
            .first_name("Grace")
            .last_name("Hopper")
            .email("grace@example.com")
            .build();

        assert_eq!(custom.first_name, "Grace");
        assert_eq!(custom.last_name, "Hopper");
        assert_eq!(custom.email, "grace@example.com");
    }
}
