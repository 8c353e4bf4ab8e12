use crate::modules::events::coordinator::{CoordinatorError, EventCoordinator};
use crate::modules::organizers::core::organizer::EVENTS_FIELD;
use crate::shared::infrastructure::document_store::{Collection, DocumentStore};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnlinkStatus {
    Complete { organizers_modified: u64 },
    /// Events are gone but organizers may still list some of their ids.
    Incomplete { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeletion {
    pub deleted_count: usize,
    pub deleted_ids: Vec<String>,
    pub unlink: UnlinkStatus,
}

impl BulkDeletion {
    pub fn is_complete(&self) -> bool {
        matches!(self.unlink, UnlinkStatus::Complete { .. })
    }
}

impl<TStore> EventCoordinator<TStore>
where
    TStore: DocumentStore + Send + Sync + 'static,
{
    /// Deletes every event, then strips the deleted ids from every organizer.
    ///
    /// Only a failing bulk delete fails the operation. A failing unlink sweep is
    /// reported through `UnlinkStatus::Incomplete` next to the deleted ids.
    pub async fn delete_all_events(&self) -> Result<BulkDeletion, CoordinatorError> {
        let deleted_ids = self.store.delete_all(Collection::Events).await?;
        let deleted_count = deleted_ids.len();
        if deleted_ids.is_empty() {
            return Ok(BulkDeletion {
                deleted_count,
                deleted_ids,
                unlink: UnlinkStatus::Complete {
                    organizers_modified: 0,
                },
            });
        }

        let values: Vec<Value> = deleted_ids.iter().cloned().map(Value::String).collect();
        let unlink = match self
            .store
            .remove_from_array_field_everywhere(Collection::Organizers, EVENTS_FIELD, &values)
            .await
        {
            Ok(outcome) => {
                tracing::info!(deleted_count, organizers_modified = outcome.modified, "all events deleted");
                UnlinkStatus::Complete {
                    organizers_modified: outcome.modified,
                }
            }
            Err(error) => {
                tracing::warn!(deleted_count, %error, "events deleted but organizers may still reference them");
                UnlinkStatus::Incomplete {
                    reason: error.to_string(),
                }
            }
        };

        Ok(BulkDeletion {
            deleted_count,
            deleted_ids,
            unlink,
        })
    }
}
