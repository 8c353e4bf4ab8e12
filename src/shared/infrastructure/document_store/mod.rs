// Port for the document storage engine holding events and organizers.
//
// Every update reports how many documents it matched and modified. A zero
// matched count means the target does not exist; an `Err` means the store
// itself failed. Callers must keep the two apart.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

pub type Document = Map<String, Value>;

/// Field under which every stored document carries its own identifier.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Events,
    Organizers,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Organizers => "organizers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("malformed document {id} in {collection}: {reason}")]
    Malformed {
        collection: Collection,
        id: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_unmatched(&self) -> bool {
        self.matched == 0
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `document` under a freshly assigned identifier and returns it.
    async fn insert(&self, collection: Collection, document: Document)
    -> Result<String, StoreError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Every document of `collection`, in store iteration order.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Overwrites the given top level fields. The identifier field is never replaced.
    async fn replace_fields(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Atomically appends `value` to the array under `field`. A value that is
    /// already present matches without modifying, so the array never holds duplicates.
    async fn append_to_array_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Atomically removes every occurrence of `value` from the array under `field`.
    /// A document without the field matches and stays untouched.
    async fn remove_from_array_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: &Value,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Removes every element of `values` from the array under `field` in all
    /// documents of `collection`. Matches every document; counts as modified
    /// only those whose array changed.
    async fn remove_from_array_field_everywhere(
        &self,
        collection: Collection,
        field: &str,
        values: &[Value],
    ) -> Result<UpdateOutcome, StoreError>;

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;

    /// Deletes every document of `collection` and returns the deleted identifiers.
    async fn delete_all(&self, collection: Collection) -> Result<Vec<String>, StoreError>;
}

pub mod in_memory;
