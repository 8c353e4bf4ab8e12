// Shared test fixture for event payloads.

use crate::modules::events::core::event::NewEvent;
use serde_json::{Map, Value};

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEventBuilder {
    pub fn new() -> Self {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), Value::from("Launch"));
        attributes.insert("date".to_string(), Value::from("2026-11-02"));
        Self {
            inner: NewEvent {
                organizer_id: "org-fixed-0001".to_string(),
                attributes,
            },
        }
    }

    pub fn organizer_id(mut self, v: impl Into<String>) -> Self {
        self.inner.organizer_id = v.into();
        self
    }

    pub fn title(self, v: impl Into<String>) -> Self {
        let title: String = v.into();
        self.attribute("title", title)
    }

    pub fn attribute(mut self, key: impl Into<String>, v: impl Into<Value>) -> Self {
        self.inner.attributes.insert(key.into(), v.into());
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod new_event_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new() {
        let built = NewEventBuilder::default().build();
        assert_eq!(built.organizer_id, "org-fixed-0001");
        assert_eq!(built.attributes["title"], json!("Launch"));
        assert_eq!(built.attributes["date"], json!("2026-11-02"));
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = NewEventBuilder::new()
            .organizer_id("org-2")
            .title("Retro")
            .attribute("capacity", 40)
            .build();

        assert_eq!(custom.organizer_id, "org-2");
        assert_eq!(custom.attributes["title"], json!("Retro"));
        assert_eq!(custom.attributes["capacity"], json!(40));
    }
}
