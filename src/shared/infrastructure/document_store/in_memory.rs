// In memory implementation of the DocumentStore port.
//
// Purpose
// - Back the services in tests and local development without a database.
//
// Responsibilities
// - Keep one ordered map of documents per collection. Identifiers are UUID v7,
//   so iteration order follows insertion order.
// - Run every mutation under a single write lock, making each single document
//   array operation atomic.
// - Simulate failures: the whole store going offline, or one operation failing.

use crate::shared::infrastructure::document_store::{
    Collection, Document, DocumentStore, ID_FIELD, StoreError, UpdateOutcome,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Insert,
    FindById,
    FindAll,
    ReplaceFields,
    AppendToArrayField,
    RemoveFromArrayField,
    RemoveFromArrayFieldEverywhere,
    DeleteById,
    DeleteAll,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreOperation::Insert => "insert",
            StoreOperation::FindById => "find_by_id",
            StoreOperation::FindAll => "find_all",
            StoreOperation::ReplaceFields => "replace_fields",
            StoreOperation::AppendToArrayField => "append_to_array_field",
            StoreOperation::RemoveFromArrayField => "remove_from_array_field",
            StoreOperation::RemoveFromArrayFieldEverywhere => "remove_from_array_field_everywhere",
            StoreOperation::DeleteById => "delete_by_id",
            StoreOperation::DeleteAll => "delete_all",
        };
        f.write_str(name)
    }
}

type Collections = HashMap<Collection, BTreeMap<String, Document>>;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Collections>,
    is_offline: bool,
    failing: HashSet<StoreOperation>,
    delay_ms: u64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Makes every call of `operation` fail with a backend error.
    pub fn fail_on(&mut self, operation: StoreOperation) {
        self.failing.insert(operation);
    }

    pub fn clear_failures(&mut self) {
        self.failing.clear();
    }

    /// Delays every call, widening the window between the steps of compound operations.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    async fn guard(&self, operation: StoreOperation) -> Result<(), StoreError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.is_offline {
            return Err(StoreError::Backend("Document store offline".into()));
        }
        if self.failing.contains(&operation) {
            return Err(StoreError::Backend(format!("{operation} failed")));
        }
        Ok(())
    }
}

fn as_array<'a>(
    collection: Collection,
    id: &str,
    field: &str,
    slot: &'a mut Value,
) -> Result<&'a mut Vec<Value>, StoreError> {
    match slot {
        Value::Array(items) => Ok(items),
        other => Err(StoreError::Malformed {
            collection,
            id: id.to_string(),
            reason: format!("field `{field}` holds {other} instead of an array"),
        }),
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<String, StoreError> {
        self.guard(StoreOperation::Insert).await?;
        let id = Uuid::now_v7().to_string();
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        let mut g = self.inner.write().await;
        g.entry(collection).or_default().insert(id.clone(), document);
        Ok(id)
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.guard(StoreOperation::FindById).await?;
        let g = self.inner.read().await;
        Ok(g.get(&collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.guard(StoreOperation::FindAll).await?;
        let g = self.inner.read().await;
        Ok(g
            .get(&collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn replace_fields(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        self.guard(StoreOperation::ReplaceFields).await?;
        let mut g = self.inner.write().await;
        let Some(document) = g.get_mut(&collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(UpdateOutcome::none());
        };
        let mut modified = false;
        for (key, value) in fields {
            if key == ID_FIELD {
                continue;
            }
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }
        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn append_to_array_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<UpdateOutcome, StoreError> {
        self.guard(StoreOperation::AppendToArrayField).await?;
        let mut g = self.inner.write().await;
        let Some(document) = g.get_mut(&collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(UpdateOutcome::none());
        };
        let slot = document
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let items = as_array(collection, id, field, slot)?;
        if items.contains(&value) {
            return Ok(UpdateOutcome {
                matched: 1,
                modified: 0,
            });
        }
        items.push(value);
        Ok(UpdateOutcome {
            matched: 1,
            modified: 1,
        })
    }

    async fn remove_from_array_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: &Value,
    ) -> Result<UpdateOutcome, StoreError> {
        self.guard(StoreOperation::RemoveFromArrayField).await?;
        let mut g = self.inner.write().await;
        let Some(document) = g.get_mut(&collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(UpdateOutcome::none());
        };
        let Some(slot) = document.get_mut(field) else {
            return Ok(UpdateOutcome {
                matched: 1,
                modified: 0,
            });
        };
        let items = as_array(collection, id, field, slot)?;
        let before = items.len();
        items.retain(|item| item != value);
        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(items.len() != before),
        })
    }

    async fn remove_from_array_field_everywhere(
        &self,
        collection: Collection,
        field: &str,
        values: &[Value],
    ) -> Result<UpdateOutcome, StoreError> {
        self.guard(StoreOperation::RemoveFromArrayFieldEverywhere)
            .await?;
        let mut g = self.inner.write().await;
        let mut outcome = UpdateOutcome::none();
        let Some(docs) = g.get_mut(&collection) else {
            return Ok(outcome);
        };
        // Documents are updated one by one; a malformed one stops the sweep
        // with the earlier documents already modified.
        for (id, document) in docs.iter_mut() {
            outcome.matched += 1;
            let Some(slot) = document.get_mut(field) else {
                continue;
            };
            let items = as_array(collection, id, field, slot)?;
            let before = items.len();
            items.retain(|item| !values.contains(item));
            if items.len() != before {
                outcome.modified += 1;
            }
        }
        Ok(outcome)
    }

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        self.guard(StoreOperation::DeleteById).await?;
        let mut g = self.inner.write().await;
        Ok(g
            .get_mut(&collection)
            .and_then(|docs| docs.remove(id))
            .is_some())
    }

    async fn delete_all(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        self.guard(StoreOperation::DeleteAll).await?;
        let mut g = self.inner.write().await;
        let deleted = g.remove(&collection).unwrap_or_default();
        Ok(deleted.into_keys().collect())
    }
}
