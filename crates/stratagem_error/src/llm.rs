//! LLM provider error types.

/// Specific failure conditions when talking to the language model provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LlmErrorKind {
    /// Transport-level failure (connection refused, TLS, DNS)
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },
    /// The call exceeded the configured per-call timeout
    #[display("Timed out after {:?}", after)]
    Timeout {
        /// Timeout that elapsed
        after: std::time::Duration,
    },
    /// Provider returned no text output
    #[display("Provider returned no text output")]
    EmptyResponse,
    /// Provider body could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    ResponseParsing(String),
    /// Request could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestBuilding(String),
}

/// LLM error with location tracking.
///
/// Section generators catch this error and substitute their documented fallback.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("LLM Error: {} at {}:{}", kind, file, line)]
pub struct LlmError {
    /// The specific error kind
    pub kind: LlmErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl LlmError {
    /// Create a new LLM error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use stratagem_error::{LlmError, LlmErrorKind};
    ///
    /// let err = LlmError::new(LlmErrorKind::Timeout { after: Duration::from_secs(60) });
    /// assert!(format!("{}", err).contains("Timed out"));
    /// ```
    #[track_caller]
    pub fn new(kind: LlmErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
