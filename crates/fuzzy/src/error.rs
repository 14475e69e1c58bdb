//! Error types for the fuzzy crate.

use thiserror::Error;

/// Result type alias for fuzzy search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building search options.
///
/// Scoring and searching themselves never fail; every error surfaces when
/// options are constructed or parsed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Threshold is not a number
    #[error("Invalid threshold: {0} (expected a number between 0.0 and 1.0)")]
    InvalidThreshold(f64),

    /// Limit must be at least one
    #[error("Invalid limit: {0} (expected a positive integer)")]
    InvalidLimit(usize),

    /// Options could not be interpreted
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for programmatic handling.
/// Range: 11xxx for fuzzy search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Threshold is not a number
    InvalidThreshold = 11001,
    /// Limit must be at least one
    InvalidLimit = 11002,
    /// Options could not be interpreted
    InvalidOptions = 11003,
    /// JSON parsing error
    JsonParsing = 11004,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidThreshold(_) => SearchErrorCode::InvalidThreshold,
            SearchError::InvalidLimit(_) => SearchErrorCode::InvalidLimit,
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SearchError::InvalidThreshold(f64::NAN).code() as u32, 11001);
        assert_eq!(SearchError::InvalidLimit(0).code() as u32, 11002);
    }

    #[test]
    fn test_error_message_names_argument() {
        let message = SearchError::InvalidLimit(0).to_string();
        assert!(message.contains("limit"));
    }
}
