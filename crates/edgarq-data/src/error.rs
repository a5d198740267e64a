//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Lookup target does not exist (unknown ticker, CIK without filings)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller supplied a malformed value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Shorthand for an [`DataError::InvalidInput`] error.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Returns true for [`DataError::NotFound`].
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true for [`DataError::InvalidInput`].
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::NotFound("Ticker 'ZZZZ' not found".to_string());
        assert_eq!(err.to_string(), "Not found: Ticker 'ZZZZ' not found");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_input());

        let err = DataError::invalid("limit must be at least 1");
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("limit must be at least 1"));
    }
}
