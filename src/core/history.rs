use crate::core::storage::{KeyValueStore, get_json, put_json};
use anyhow::Result;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

pub const HISTORY_KEY: &str = "conversion_history";

/// Number of records shown by [`HistoryLog::recent_display`].
pub const DISPLAY_LIMIT: usize = 5;

/// Formats a history record as `DD/MM/YYYY HH:MM:SS - <description>`.
pub fn record<Tz>(description: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} - {}", at.format("%d/%m/%Y %H:%M:%S"), description)
}

/// Append-only log of past conversions.
///
/// The full list is persisted under [`HISTORY_KEY`]; only the newest
/// [`DISPLAY_LIMIT`] records are ever handed out.
#[derive(Clone)]
pub struct HistoryLog {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<String>> {
        Ok(get_json(self.store.as_ref(), HISTORY_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn append(&self, record: &str) -> Result<()> {
        let mut records = self.load().await?;
        records.push(record.to_string());
        debug!(count = records.len(), "Appending history record");
        put_json(self.store.as_ref(), HISTORY_KEY, &records).await
    }

    /// Most recent records, newest first.
    pub async fn recent_display(&self) -> Result<Vec<String>> {
        let records = self.load().await?;
        Ok(records.into_iter().rev().take(DISPLAY_LIMIT).collect())
    }
}
