//! Error types for the Stratagem recommendation core.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums define specific error conditions where a category has several
//! - `*Error` structs carry the condition plus the source location that raised it
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy is closed. Section generators absorb [`LlmError`] into fallback
//! content; every other kind surfaces from `generate_recommendation`.
//!
//! # Examples
//!
//! ```
//! use stratagem_error::{StratagemResult, ValidationError};
//!
//! fn check_title(title: &str) -> StratagemResult<()> {
//!     if title.is_empty() {
//!         Err(ValidationError::new("Brief title cannot be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_title("").is_err());
//! assert!(check_title("Projet Test").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancelled;
mod config;
mod error;
mod internal;
mod llm;
mod render;
mod validation;

pub use cancelled::CancelledError;
pub use config::ConfigError;
pub use error::{StratagemError, StratagemErrorKind, StratagemResult};
pub use internal::InternalError;
pub use llm::{LlmError, LlmErrorKind};
pub use render::RenderError;
pub use validation::ValidationError;
