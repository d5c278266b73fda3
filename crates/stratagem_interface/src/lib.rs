//! Port traits for the Stratagem recommendation core.
//!
//! The core talks to the outside world through three seams:
//! - [`LlmDriver`]: a raw provider (OpenAI-compatible chat, test stubs)
//! - [`LlmPort`]: the `llm(prompt_id, context)` contract section generators use
//! - [`SlideRenderer`]: writes a slide descriptor sequence to a file

mod context;
mod traits;

pub use context::{CONTEXT_CLOSE, CONTEXT_OPEN, PromptContext};
pub use traits::{LlmDriver, LlmPort, SlideRenderer};
