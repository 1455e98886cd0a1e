use crate::core::storage::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION_NAME: &str = "widget";

/// Store backed by a fjall keyspace on disk.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;

        let keyspace = Config::new(path)
            .open()
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION_NAME, PartitionCreateOptions::default())
            .context("Failed to open store partition")?;
        debug!("Opened disk store at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl KeyValueStore for DiskStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self.partition.get(key.as_bytes())? {
            Some(value) => {
                debug!("Store HIT for key: {}", key);
                let text = String::from_utf8(value.to_vec())
                    .with_context(|| format!("Stored value for {key} is not UTF-8"))?;
                Ok(Some(text))
            }
            None => {
                debug!("Store MISS for key: {}", key);
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.partition.insert(key.as_bytes(), value.into_bytes())?;
        // Values must survive the process, which usually exits right after a conversion
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Store PUT for key: {}", key);
        Ok(())
    }
}
