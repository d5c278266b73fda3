//! Top-level error wrapper types.

use crate::{CancelledError, ConfigError, InternalError, LlmError, RenderError, ValidationError};

/// Every error kind that can leave a Stratagem crate.
///
/// # Examples
///
/// ```
/// use stratagem_error::{StratagemError, StratagemErrorKind, ConfigError};
///
/// let err: StratagemError = ConfigError::new("Missing OpenAI API key").into();
/// assert!(matches!(err.kind(), StratagemErrorKind::Config(_)));
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StratagemErrorKind {
    /// Malformed input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Missing prompt, bad configuration or missing credentials
    #[from(ConfigError)]
    Config(ConfigError),
    /// Provider or timeout failure
    #[from(LlmError)]
    Llm(LlmError),
    /// External cancellation
    #[from(CancelledError)]
    Cancelled(CancelledError),
    /// Broken deck invariant
    #[from(InternalError)]
    Internal(InternalError),
    /// Slide file could not be written
    #[from(RenderError)]
    Render(RenderError),
}

/// Stratagem error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stratagem Error: {}", _0)]
pub struct StratagemError(Box<StratagemErrorKind>);

impl StratagemError {
    /// Create a new error from a kind.
    pub fn new(kind: StratagemErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StratagemErrorKind {
        &self.0
    }

    /// Whether a section generator may replace this failure with fallback content.
    ///
    /// Only provider failures qualify. Configuration problems and cancellation
    /// must reach the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem_error::{CancelledError, LlmError, LlmErrorKind, StratagemError};
    ///
    /// let llm: StratagemError = LlmError::new(LlmErrorKind::EmptyResponse).into();
    /// assert!(llm.is_recoverable());
    ///
    /// let cancelled: StratagemError = CancelledError::new("insights").into();
    /// assert!(!cancelled.is_recoverable());
    /// ```
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), StratagemErrorKind::Llm(_))
    }
}

// Generic From implementation for any type that converts to StratagemErrorKind
impl<T> From<T> for StratagemError
where
    T: Into<StratagemErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Stratagem operations.
pub type StratagemResult<T> = std::result::Result<T, StratagemError>;
