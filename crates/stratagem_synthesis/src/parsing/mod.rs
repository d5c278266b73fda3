//! Parsers for free-form model output.
//!
//! Every parser is total over its input: text that does not match the expected
//! shape either yields a [`ParseError`] or is skipped line by line. Callers turn
//! a `ParseError` into the section fallback; it never leaves this crate's
//! generators.

mod amount;
mod records;
mod text;

pub use amount::parse_amount;
pub use records::{
    parse_brand_overview, parse_budget, parse_ideas, parse_labels, parse_state_of_play_evidence,
    parse_timeline,
};
pub use text::{list_items, strip_fences, strip_list_prefix};

/// Model output could not be read in the expected shape.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", message, line, file)]
pub struct ParseError {
    /// What did not match
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with the given message at the current location.
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

/// Result type for parsers.
pub type ParseResult<T> = Result<T, ParseError>;
