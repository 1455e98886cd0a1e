//! Conversion between the local (ARS) and foreign (USD) currency

use crate::core::quote::Quote;
use anyhow::{Result, anyhow, bail};
use std::fmt::Display;
use std::str::FromStr;

pub const LOCAL_CURRENCY: &str = "ARS";
pub const FOREIGN_CURRENCY: &str = "USD";

/// Tax added on top of every foreign to local conversion.
pub const SURCHARGE_RATE: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// ARS to USD
    #[default]
    LocalToForeign,
    /// USD to ARS, surcharge applied
    ForeignToLocal,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::LocalToForeign => "ars-usd",
                Direction::ForeignToLocal => "usd-ars",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ars-usd" => Ok(Direction::LocalToForeign),
            "usd-ars" => Ok(Direction::ForeignToLocal),
            _ => Err(anyhow!("Invalid conversion direction: {}", s)),
        }
    }
}

/// Parses user input into a strictly positive, finite amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid amount: {}", input))?;
    if !amount.is_finite() || amount <= 0.0 {
        bail!("Amount must be a positive number: {}", input);
    }
    Ok(amount)
}

pub fn converted_amount(amount: f64, direction: Direction, quote: &Quote) -> f64 {
    match direction {
        Direction::LocalToForeign => amount / quote.sell_rate,
        Direction::ForeignToLocal => {
            let local = amount * quote.sell_rate;
            local + local * SURCHARGE_RATE
        }
    }
}

/// Formats the conversion of `amount` in `direction` using `quote`.
pub fn convert(amount: f64, direction: Direction, quote: &Quote) -> String {
    let result = converted_amount(amount, direction, quote);
    match direction {
        Direction::LocalToForeign => {
            format!("{amount:.2} {LOCAL_CURRENCY} = {result:.2} {FOREIGN_CURRENCY}")
        }
        Direction::ForeignToLocal => format!(
            "{amount:.2} {FOREIGN_CURRENCY} = {result:.2} {LOCAL_CURRENCY} (includes {:.0}% surcharge)",
            SURCHARGE_RATE * 100.0
        ),
    }
}
