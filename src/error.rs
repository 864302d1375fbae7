// error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown timeframe '{0}', expected one of 1M, 3M, 1Y, 5Y, Max")]
    UnknownTimeframe(String),
    #[error("unknown ticker '{0}'")]
    UnknownTicker(String),
    #[error("unable to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("unable to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
