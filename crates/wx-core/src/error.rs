// File: crates/wx-core/src/error.rs
// Summary: Domain errors raised at the edges of the core (document ingestion, colors).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("forecast document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("forecast document has no `properties.timeseries` array")]
    MissingTimeseries,

    #[error("invalid expiry timestamp `{0}`")]
    InvalidExpiry(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
