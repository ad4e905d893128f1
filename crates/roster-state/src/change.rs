use roster_core::{Record, RecordId};

/// What just happened to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// A refresh went out; `loading` is true
    LoadingStarted,
    /// A refresh replaced the list
    Refreshed,
    /// A refresh failed and the previous list was kept
    RefreshFailed,
    Added(RecordId),
    Modified(RecordId),
    Removed(RecordId),
}

/// Snapshot handed to listeners after every mutation.
///
/// Borrows the model's list, so listeners can read but never mutate it.
#[derive(Debug, Clone)]
pub struct ListChange<'a> {
    pub kind: ChangeKind,
    pub records: &'a [Record],
    pub loading: bool,
}
