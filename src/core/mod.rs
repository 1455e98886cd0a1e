//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod flow;
pub mod history;
pub mod log;
pub mod notify;
pub mod quote;
pub mod quote_store;
pub mod storage;

// Re-export main types for cleaner imports
pub use convert::{Direction, convert, converted_amount, parse_amount};
pub use flow::{Conversion, ConversionFlow};
pub use history::HistoryLog;
pub use notify::{Notice, Notifier};
pub use quote::{CachedQuote, Quote, QuoteProvider, QuoteSource};
pub use quote_store::QuoteStore;
pub use storage::KeyValueStore;
