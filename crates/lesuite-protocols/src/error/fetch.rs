//! Page fetch errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status} fetching {path}")]
    Status { status: u16, path: String },

    #[error("Failed to read body: {0}")]
    Body(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            status: 500,
            path: "/voting.php".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("/voting.php"));
    }
}
