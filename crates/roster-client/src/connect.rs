use crate::{ClientResult, KeyedRecordStore, RecordStore, RestRecordStore};

use roster_config::{ApiBackend, ApiConfig};

use std::sync::Arc;

use log::info;

/// Build the store described by the api config.
///
/// Each call returns a fresh, independent adapter to be injected into one
/// state holder.
pub fn connect(config: &ApiConfig) -> ClientResult<Arc<dyn RecordStore>> {
    info!(
        "Connecting to {} store at {} (collection '{}')",
        config.backend, config.base_url, config.collection
    );

    let store: Arc<dyn RecordStore> = match config.backend {
        ApiBackend::Rest => Arc::new(RestRecordStore::new(
            &config.base_url,
            &config.collection,
        )?),
        ApiBackend::Keyed => Arc::new(KeyedRecordStore::new(
            &config.base_url,
            &config.collection,
        )?),
    };

    Ok(store)
}
