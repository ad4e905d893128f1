mod record;
mod record_fields;
mod record_id;
