use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ParseError;

/// An amount with its symbol, read from the chain's `"<decimal> <SYMBOL>"`
/// encoding (e.g. `"18.494 SBD"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub amount: f64,
    pub symbol: String,
}

impl Asset {
    pub fn new(amount: f64, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            symbol: symbol.into(),
        }
    }

    pub fn zero(symbol: impl Into<String>) -> Self {
        Self::new(0.0, symbol)
    }

    /// Amount of an account or entry field. Empty strings read as 0; a
    /// malformed string is logged and also reads as 0.
    pub fn amount_or_zero(raw: &str) -> f64 {
        match parse_asset(raw) {
            Ok(asset) => asset.amount,
            Err(ParseError::Empty) => 0.0,
            Err(e) => {
                warn!("Treating malformed asset {:?} as zero: {}", raw, e);
                0.0
            }
        }
    }
}

impl FromStr for Asset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_asset(s)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.symbol)
    }
}

/// Split on the first whitespace run: a decimal amount on the left, the
/// symbol on the right.
pub fn parse_asset(raw: &str) -> Result<Asset, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (amount, symbol) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| ParseError::MissingSymbol(raw.to_string()))?;

    let amount: f64 = amount
        .parse()
        .map_err(|_| ParseError::InvalidAmount(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(ParseError::InvalidAmount(raw.to_string()));
    }

    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ParseError::MissingSymbol(raw.to_string()));
    }

    Ok(Asset {
        amount,
        symbol: symbol.to_uppercase(),
    })
}
