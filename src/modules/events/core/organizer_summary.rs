use crate::shared::infrastructure::document_store::{Document, ID_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only projection of an organizer's identity fields attached to events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerSummary {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl OrganizerSummary {
    /// `None` for documents lacking an identifier; the projection is for display
    /// only, so other fields may be missing.
    pub fn from_document(document: &Document) -> Option<Self> {
        let text = |field: &str| document.get(field).and_then(Value::as_str).map(String::from);
        Some(Self {
            id: text(ID_FIELD)?,
            first_name: text("first_name"),
            last_name: text("last_name"),
            email: text("email"),
        })
    }
}
