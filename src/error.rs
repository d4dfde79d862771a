//! llm-strings error types

/// llm-strings error types
///
/// Only structural failures surface as errors. Unknown providers, unsupported
/// parameters and bad values are reported as [`ValidationIssue`](crate::ValidationIssue)s.
#[derive(Debug, thiserror::Error)]
pub enum LlmStringsError {
    // Connection string errors
    #[error("invalid connection string: {0}")]
    InvalidUrl(String),

    #[error("invalid scheme '{0}', expected 'llm'")]
    InvalidScheme(String),

    #[error("connection string has no host")]
    MissingHost,

    #[error("connection string has no model")]
    MissingModel,

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<url::ParseError> for LlmStringsError {
    fn from(err: url::ParseError) -> Self {
        LlmStringsError::InvalidUrl(err.to_string())
    }
}

/// Result type alias for llm-strings operations
pub type Result<T> = std::result::Result<T, LlmStringsError>;
