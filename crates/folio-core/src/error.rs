//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The form endpoint answered with a non-ok status
    #[error("Submission rejected with status {status}")]
    Submission { status: u16 },

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document was not valid JSON for `FolioConfig`
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A required page element is absent
    #[error("Element not found: {0}")]
    ElementMissing(String),

    /// A browser API call was rejected
    #[error("DOM error: {0}")]
    Dom(String),

    /// The global subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Submission { status: 422 };
        assert_eq!(format!("{}", err), "Submission rejected with status 422");

        let err = FolioError::ElementMissing("#navbar".to_string());
        assert_eq!(err.to_string(), "Element not found: #navbar");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
