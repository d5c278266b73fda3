//! Cancellation error type.

/// The external cancellation signal fired before the deck was complete.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cancelled during {} at line {} in {}", stage, line, file)]
pub struct CancelledError {
    /// Pipeline stage that observed the signal (usually a section id)
    pub stage: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CancelledError {
    /// Create a new CancelledError for the given stage.
    #[track_caller]
    pub fn new(stage: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage: stage.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
