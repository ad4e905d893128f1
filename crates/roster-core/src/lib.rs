pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::record::Record;
pub use models::record_fields::{MAX_NAME_LENGTH, RecordFields};
pub use models::record_id::RecordId;
