//! Cache errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
