//! Advisory messages surfaced to the user.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The remote quote failed and the last saved quote is used instead.
    UsingCachedQuote,
    /// The remote quote failed and nothing was saved yet.
    UsingDefaultQuote,
    InvalidAmount,
    SavedToHistory,
    ConversionDone(String),
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::InvalidAmount)
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::UsingCachedQuote => write!(f, "Using the last saved quote."),
            Notice::UsingDefaultQuote => write!(f, "Using the local default quote."),
            Notice::InvalidAmount => write!(f, "Enter a valid amount."),
            Notice::SavedToHistory => write!(f, "Conversion saved to history"),
            Notice::ConversionDone(text) => write!(f, "Conversion done: {text}"),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

