//! Quote types and the remote quote source abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sell rate used when neither the remote source nor the cache can answer.
pub const LOCAL_DEFAULT_SELL_RATE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteSource {
    /// Fetched just now; carries the name reported by the remote source.
    Remote(String),
    /// Last quote saved after a successful fetch.
    Cache { retrieved_at: DateTime<Utc> },
    Local,
}

impl Display for QuoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteSource::Remote(name) => write!(f, "{name}"),
            QuoteSource::Cache { retrieved_at } => {
                write!(f, "Cached ({})", retrieved_at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            QuoteSource::Local => write!(f, "Local"),
        }
    }
}

/// A snapshot exchange rate used for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub sell_rate: f64,
    pub source: QuoteSource,
}

impl Quote {
    pub fn local_default() -> Self {
        Quote {
            sell_rate: LOCAL_DEFAULT_SELL_RATE,
            source: QuoteSource::Local,
        }
    }
}

/// Last successfully fetched rate, persisted as `{"rate": .., "timestamp": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedQuote {
    #[serde(rename = "rate")]
    pub sell_rate: f64,
    #[serde(rename = "timestamp")]
    pub retrieved_at: DateTime<Utc>,
}

impl From<CachedQuote> for Quote {
    fn from(cached: CachedQuote) -> Self {
        Quote {
            sell_rate: cached.sell_rate,
            source: QuoteSource::Cache {
                retrieved_at: cached.retrieved_at,
            },
        }
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self) -> Result<Quote>;
}
