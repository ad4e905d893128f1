use crate::ClientResult;

use roster_core::{Record, RecordFields, RecordId};

use async_trait::async_trait;

/// Boundary to the remote store.
///
/// Every method issues exactly one outbound call and either returns the
/// decoded reply or fails. Nothing is retried.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read all records in the order the store returns them
    async fn list(&self) -> ClientResult<Vec<Record>>;

    /// Write a new record; the store assigns the identifier
    async fn create(&self, fields: &RecordFields) -> ClientResult<Record>;

    /// Overwrite the fields of an existing record
    async fn update(&self, record: &Record) -> ClientResult<()>;

    /// Remove the record with this identifier
    async fn delete(&self, id: &RecordId) -> ClientResult<()>;
}
