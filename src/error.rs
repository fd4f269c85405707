//! Attrisk error types

/// The single message shown to users when a submission fails.
///
/// All failure causes collapse to this string at the presentation layer;
/// the underlying error goes to the log only.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to make prediction. Please check your inputs and try again.";

/// Attrisk error types
#[derive(Debug, thiserror::Error)]
pub enum AttriskError {
    // Transport failed before a status line was read
    #[error("network error: {0}")]
    Network(String),

    // Non-2xx response; the status is kept for diagnostics, nothing
    // branches on it
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Response body did not decode into the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("operation not implemented: {0}")]
    NotImplemented(&'static str),
}

impl AttriskError {
    /// The user-facing message for this error.
    ///
    /// Every variant maps to the same generic string; the taxonomy exists
    /// for logs and tests, not for the user.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Result type alias for attrisk operations
pub type Result<T> = std::result::Result<T, AttriskError>;
