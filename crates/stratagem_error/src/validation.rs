//! Input validation error types.

/// Raised by domain constructors when an invariant does not hold.
///
/// Invalid input is never silently repaired; this error always reaches the caller.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Description of the violated rule
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem_error::ValidationError;
    ///
    /// let err = ValidationError::new("Trend date is not ISO-8601");
    /// assert!(err.message.contains("ISO-8601"));
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
