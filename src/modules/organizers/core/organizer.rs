use crate::shared::infrastructure::document_store::{Collection, Document, ID_FIELD, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field of an organizer document listing the identifiers of the events it owns.
pub const EVENTS_FIELD: &str = "events";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl Organizer {
    pub fn from_document(document: Document) -> Result<Self, StoreError> {
        let id = document
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        serde_json::from_value(Value::Object(document)).map_err(|e| StoreError::Malformed {
            collection: Collection::Organizers,
            id,
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganizer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewOrganizer {
    /// Document for a fresh organizer, owning no events yet.
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert("first_name".into(), Value::String(self.first_name));
        document.insert("last_name".into(), Value::String(self.last_name));
        document.insert("email".into(), Value::String(self.email));
        document.insert(EVENTS_FIELD.into(), Value::Array(Vec::new()));
        document
    }
}
