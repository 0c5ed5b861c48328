//! Error types for wallet derivations

use thiserror::Error;

pub type WalletResult<T> = Result<T, WalletError>;

/// Failure to read an asset string or chain value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty asset string")]
    Empty,

    #[error("invalid amount in asset string: {0}")]
    InvalidAmount(String),

    #[error("missing symbol in asset string: {0}")]
    MissingSymbol(String),

    #[error("invalid chain time: {0}")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum WalletError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("malformed {op_type} operation: {reason}")]
    MalformedOperation { op_type: String, reason: String },

    #[error(transparent)]
    Source(#[from] shared::Error),
}
