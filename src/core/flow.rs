//! One conversion request, from raw user input to the saved history record.

use crate::core::convert::{Direction, convert, parse_amount};
use crate::core::history::{self, HistoryLog};
use crate::core::notify::{Notice, Notifier};
use crate::core::quote::Quote;
use crate::providers::fallback::FallbackQuoteProvider;
use anyhow::{Result, bail};
use chrono::Local;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Conversion {
    pub text: String,
    pub quote: Quote,
    /// Most recent history records after this conversion was saved, newest first.
    pub recent: Vec<String>,
}

pub struct ConversionFlow {
    quotes: FallbackQuoteProvider,
    history: HistoryLog,
    notifier: Arc<dyn Notifier>,
    busy: Mutex<()>,
}

impl ConversionFlow {
    pub fn new(
        quotes: FallbackQuoteProvider,
        history: HistoryLog,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            quotes,
            history,
            notifier,
            busy: Mutex::new(()),
        }
    }

    pub async fn submit(&self, amount_input: &str, direction_input: &str) -> Result<Conversion> {
        let amount = match parse_amount(amount_input) {
            Ok(amount) => amount,
            Err(e) => {
                self.notifier.notify(Notice::InvalidAmount);
                return Err(e);
            }
        };
        let direction: Direction = direction_input.parse()?;

        let Ok(_guard) = self.busy.try_lock() else {
            bail!("A conversion is already in progress");
        };

        let quote = self.quotes.get_quote().await;
        debug!(sell_rate = quote.sell_rate, source = %quote.source, "Using quote");

        let text = convert(amount, direction, &quote);
        info!(%direction, amount, "Converted: {}", text);

        self.history
            .append(&history::record(&text, &Local::now()))
            .await?;
        self.notifier.notify(Notice::SavedToHistory);
        let recent = self.history.recent_display().await?;
        self.notifier.notify(Notice::ConversionDone(text.clone()));

        Ok(Conversion {
            text,
            quote,
            recent,
        })
    }

    /// Current quote without converting or touching the history.
    pub async fn quote(&self) -> Quote {
        self.quotes.get_quote().await
    }

    pub async fn recent(&self) -> Result<Vec<String>> {
        self.history.recent_display().await
    }
}
