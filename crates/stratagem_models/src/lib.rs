//! Prompt registry and LLM provider integration for Stratagem.
//!
//! - [`PromptRegistry`] maps prompt ids to template files and loads them lazily.
//! - [`OpenAiClient`] is an [`LlmDriver`](stratagem_interface::LlmDriver) for
//!   any OpenAI-compatible chat-completions endpoint.
//! - [`PromptedLlm`] is the concrete [`LlmPort`](stratagem_interface::LlmPort):
//!   template + context block, one system message, per-call timeout.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use stratagem_core::{LlmSettings, SectionId};
//! use stratagem_interface::{LlmPort, PromptContext};
//! use stratagem_models::{OpenAiClient, PromptRegistry, PromptedLlm};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = LlmSettings::default();
//! let client = OpenAiClient::new(Some("sk-...".to_string()), settings.model());
//! let registry = Arc::new(PromptRegistry::new("prompts"));
//! let port = PromptedLlm::new(client, registry, settings);
//!
//! let summary = port
//!     .llm(SectionId::ExecutiveSummary.as_ref(), &PromptContext::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod openai;
mod port;
mod prompts;

pub use openai::OpenAiClient;
pub use port::{PromptedLlm, render_prompt};
pub use prompts::PromptRegistry;
