//! Session scoping errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The expected session cookie was absent; the user is not logged in.
    #[error("Session cookie '{0}' not present; log in to the game first")]
    MissingCookie(String),

    #[error("Unrecognized game host: {0}")]
    UnknownHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cookie_display() {
        let err = SessionError::MissingCookie("legacy_hash".to_string());
        assert!(err.to_string().contains("legacy_hash"));
        assert!(err.to_string().contains("log in"));
    }
}
