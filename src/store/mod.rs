pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::storage::KeyValueStore;
use anyhow::Result;
use disk::DiskStore;
use std::sync::Arc;

/// Opens the persistent store under the configured data directory.
pub fn open_store(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>> {
    let path = config.default_data_path()?.join("store");
    Ok(Arc::new(DiskStore::open(&path)?))
}
