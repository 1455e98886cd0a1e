use crate::core::quote::CachedQuote;
use crate::core::storage::{KeyValueStore, get_json, put_json};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

pub const LAST_QUOTE_KEY: &str = "last_quote";

/// Holds the last quote retrieved from the remote source.
#[derive(Clone)]
pub struct QuoteStore {
    store: Arc<dyn KeyValueStore>,
}

impl QuoteStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replaces any previously saved quote.
    pub async fn save(&self, quote: &CachedQuote) -> Result<()> {
        debug!(rate = quote.sell_rate, "Saving last quote");
        put_json(self.store.as_ref(), LAST_QUOTE_KEY, quote).await
    }

    pub async fn latest(&self) -> Result<Option<CachedQuote>> {
        get_json(self.store.as_ref(), LAST_QUOTE_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_latest_is_empty_initially() {
        let quotes = QuoteStore::new(Arc::new(MemoryStore::new()));
        assert!(quotes.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_quote() {
        let store = Arc::new(MemoryStore::new());
        let quotes = QuoteStore::new(store.clone());

        let first = CachedQuote {
            sell_rate: 980.0,
            retrieved_at: Utc::now(),
        };
        let second = CachedQuote {
            sell_rate: 1015.0,
            retrieved_at: Utc::now(),
        };
        quotes.save(&first).await.unwrap();
        quotes.save(&second).await.unwrap();

        assert_eq!(quotes.latest().await.unwrap(), Some(second));

        // A single document under one key, not a list of quotes
        let raw = store.get(LAST_QUOTE_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_object());
        assert_eq!(value["rate"], 1015.0);
    }

    #[tokio::test]
    async fn test_latest_fails_on_corrupt_value() {
        let store = Arc::new(MemoryStore::new());
        store
            .put(LAST_QUOTE_KEY, "not json".to_string())
            .await
            .unwrap();

        let quotes = QuoteStore::new(store);
        let err = quotes.latest().await.unwrap_err();
        assert!(err.to_string().contains("last_quote"));
    }
}
