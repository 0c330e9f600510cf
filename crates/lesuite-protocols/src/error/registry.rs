//! Registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid path pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("A handler must be registered under at least one pattern")]
    NoPatterns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let err = RegistryError::InvalidPattern {
            pattern: "fight[".to_string(),
            message: "unclosed character class".to_string(),
        };
        assert!(err.to_string().contains("fight["));
    }
}
