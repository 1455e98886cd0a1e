use crate::core::notify::{Notice, Notifier};
use crate::core::quote::{CachedQuote, Quote, QuoteProvider};
use crate::core::quote_store::QuoteStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Wraps a remote [`QuoteProvider`] so that a quote is always available.
///
/// Successful fetches are saved to the [`QuoteStore`]. When the remote
/// source fails the saved quote is used, and when nothing was saved yet the
/// local default. Each fallback is announced through the [`Notifier`].
pub struct FallbackQuoteProvider {
    remote: Arc<dyn QuoteProvider>,
    quotes: QuoteStore,
    notifier: Arc<dyn Notifier>,
}

impl FallbackQuoteProvider {
    pub fn new(
        remote: Arc<dyn QuoteProvider>,
        quotes: QuoteStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            remote,
            quotes,
            notifier,
        }
    }

    pub async fn get_quote(&self) -> Quote {
        match self.remote.fetch_quote().await {
            Ok(quote) => {
                let cached = CachedQuote {
                    sell_rate: quote.sell_rate,
                    retrieved_at: Utc::now(),
                };
                if let Err(e) = self.quotes.save(&cached).await {
                    warn!(error = %e, "Failed to save last quote");
                }
                quote
            }
            Err(e) => {
                warn!(error = %e, "Quote request failed, using fallback");
                self.fallback().await
            }
        }
    }

    async fn fallback(&self) -> Quote {
        let cached = match self.quotes.latest().await {
            Ok(Some(cached)) if !cached.sell_rate.is_finite() || cached.sell_rate <= 0.0 => {
                debug!(rate = cached.sell_rate, "Saved quote has an invalid rate");
                None
            }
            Ok(cached) => cached,
            Err(e) => {
                debug!(error = %e, "Saved quote is unreadable");
                None
            }
        };

        match cached {
            Some(cached) => {
                self.notifier.notify(Notice::UsingCachedQuote);
                cached.into()
            }
            None => {
                self.notifier.notify(Notice::UsingDefaultQuote);
                Quote::local_default()
            }
        }
    }
}
