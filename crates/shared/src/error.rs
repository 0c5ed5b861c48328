use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chain RPC error: {0}")]
    ChainRpc(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
