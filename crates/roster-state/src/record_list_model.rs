//! In-memory cache of the store's records plus change notification.

use crate::{ChangeKind, ListChange, Listener, ListenerId, Listeners};

use roster_client::{ClientResult, RecordStore};
use roster_core::{Record, RecordFields, RecordId};

use std::fmt;
use std::sync::Arc;

use log::{debug, error};

/// State holder over one injected store.
///
/// Mutating methods take `&mut self`: the model is its own single writer and
/// listeners only ever see shared borrows of the list.
pub struct RecordListModel {
    store: Arc<dyn RecordStore>,
    records: Vec<Record>,
    loading: bool,
    last_error: Option<String>,
    listeners: Listeners,
}

impl RecordListModel {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
            loading: false,
            last_error: None,
            listeners: Listeners::new(),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed refresh, cleared by any later success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ListChange<'_>) + Send + Sync + 'static,
    {
        let listener: Listener = Box::new(listener);
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify(&self, kind: ChangeKind) {
        let change = ListChange {
            kind,
            records: &self.records,
            loading: self.loading,
        };
        self.listeners.notify(&change);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Reload the whole list from the store.
    ///
    /// A failure is logged and kept in `last_error`; the cached list stays as
    /// it was. Listeners hear about the start and the end either way.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.notify(ChangeKind::LoadingStarted);

        let kind = match self.store.list().await {
            Ok(records) => {
                debug!("Refreshed {} records", records.len());
                self.records = records;
                self.last_error = None;
                ChangeKind::Refreshed
            }
            Err(e) => {
                error!("Failed to refresh records: {}", e);
                self.last_error = Some(e.to_string());
                ChangeKind::RefreshFailed
            }
        };

        self.loading = false;
        self.notify(kind);
    }

    /// Create a record in the store and append the confirmed record
    pub async fn add(&mut self, fields: &RecordFields) -> ClientResult<Record> {
        let record = self.store.create(fields).await?;

        debug!("Added record {}", record.id);
        self.records.push(record.clone());
        self.last_error = None;
        self.notify(ChangeKind::Added(record.id.clone()));

        Ok(record)
    }

    /// Write the record's fields to the store and replace the cached entry.
    ///
    /// An id that is not cached is not an error: nothing is replaced but
    /// listeners are still notified.
    pub async fn modify(&mut self, record: Record) -> ClientResult<()> {
        self.store.update(&record).await?;

        let mut replaced = false;
        for entry in self.records.iter_mut().filter(|r| r.id == record.id) {
            *entry = record.clone();
            replaced = true;
        }

        if replaced {
            debug!("Modified record {}", record.id);
        } else {
            debug!("Modified record {} is not in the cached list", record.id);
        }

        self.last_error = None;
        self.notify(ChangeKind::Modified(record.id));

        Ok(())
    }

    /// Delete the record from the store and drop it from the cached list.
    ///
    /// Removing an id that is not cached leaves the list unchanged.
    pub async fn remove(&mut self, id: &RecordId) -> ClientResult<()> {
        self.store.delete(id).await?;

        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        debug!(
            "Removed record {} ({} cached entries dropped)",
            id,
            before - self.records.len()
        );

        self.last_error = None;
        self.notify(ChangeKind::Removed(id.clone()));

        Ok(())
    }
}

impl fmt::Debug for RecordListModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordListModel")
            .field("records", &self.records)
            .field("loading", &self.loading)
            .field("last_error", &self.last_error)
            .field("listeners", &self.listeners)
            .finish()
    }
}
