//! Configuration error types.

/// Configuration error with source location.
///
/// Covers invalid configuration records, unknown prompt ids, unreadable prompt
/// templates and missing provider credentials.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem_error::ConfigError;
    ///
    /// let err = ConfigError::new("Unknown prompt id: pricing");
    /// assert!(err.message.contains("pricing"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
