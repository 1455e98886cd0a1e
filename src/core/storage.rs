//! Key-value storage abstraction shared by the quote cache and the history log.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// A string keyed store of JSON documents.
///
/// Implementations overwrite the whole value on `put`; callers that need
/// read-modify-write semantics do it themselves.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: String) -> Result<()>;
}

/// Reads `key` and deserializes it from JSON. A missing key is `Ok(None)`.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key).await? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse stored value for key: {key}"))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub async fn put_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize value for key: {key}"))?;
    store.put(key, raw).await
}
