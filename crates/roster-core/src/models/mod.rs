pub mod record;
pub mod record_fields;
pub mod record_id;
