//! Data provider error types.

use thiserror::Error;

/// Errors raised below the provider boundary.
///
/// These never reach the answer router: `DataProvider` implementations log
/// them and return an empty record list instead.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("upstream returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DataError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

/// Convenience alias for provider results.
pub type DataResult<T> = Result<T, DataError>;
