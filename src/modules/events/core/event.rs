use crate::modules::events::core::organizer_summary::OrganizerSummary;
use crate::shared::infrastructure::document_store::{Collection, Document, ID_FIELD, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field of an event document pointing at the organizer that owns it.
pub const ORGANIZER_ID_FIELD: &str = "organizer_id";

/// Key under which reads attach the organizer summary to an event.
pub const ORGANIZER_FIELD: &str = "organizer";

/// Payload keys a client may not store because reads would shadow them.
const RESERVED_ATTRIBUTES: [&str; 1] = [ORGANIZER_FIELD];

/// The first payload key that collides with a field added on reads, if any.
pub fn reserved_attribute(attributes: &Map<String, Value>) -> Option<&'static str> {
    RESERVED_ATTRIBUTES
        .into_iter()
        .find(|key| attributes.contains_key(*key))
}

/// Payload of an event that is about to be created. Everything besides the
/// organizer reference is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub organizer_id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NewEvent {
    pub fn into_document(self) -> Document {
        let mut document = self.attributes;
        document.remove(ID_FIELD);
        document.insert(
            ORGANIZER_ID_FIELD.to_string(),
            Value::String(self.organizer_id),
        );
        document
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub organizer_id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Event {
    pub fn from_document(document: Document) -> Result<Self, StoreError> {
        let id = document
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        serde_json::from_value(Value::Object(document)).map_err(|e| StoreError::Malformed {
            collection: Collection::Events,
            id,
            reason: e.to_string(),
        })
    }
}

/// An event together with the identity of its organizer, for display.
/// `organizer` is `None` when the referenced organizer does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub organizer: Option<OrganizerSummary>,
}
