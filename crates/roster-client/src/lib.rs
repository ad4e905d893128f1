//! roster-client
//!
//! Remote-access adapters: one outbound call per CRUD verb, translated into
//! typed records or a `ClientError`.

pub(crate) mod connect;
pub(crate) mod endpoint;
pub(crate) mod error;
pub(crate) mod keyed_store;
pub(crate) mod record_store;
pub(crate) mod rest_store;

#[cfg(test)]
mod tests;

pub use connect::connect;
pub use endpoint::Endpoint;
pub use error::{ClientError, Result as ClientResult};
pub use keyed_store::KeyedRecordStore;
pub use record_store::RecordStore;
pub use rest_store::RestRecordStore;
