//! Page handler errors.

use thiserror::Error;

use super::{CacheError, FetchError};

#[derive(Debug, Error)]
pub enum HandlerError {
    /// Expected markup was absent or malformed.
    #[error("Scrape failed: {0}")]
    Scrape(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}
