//! Trait definitions for the core's external collaborators.

use crate::PromptContext;
use async_trait::async_trait;
use std::path::Path;
use stratagem_core::{GenerateRequest, GenerateResponse, SlideDescriptor};
use stratagem_error::StratagemResult;

/// Core trait that every LLM provider implements.
#[async_trait]
pub trait LlmDriver: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> StratagemResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// The single capability section generators rely on.
///
/// Implementations load the template registered under `prompt_id`, append a
/// delimited rendering of `context`, call the provider and return its text
/// trimmed of surrounding whitespace. They must have no side effects besides
/// the provider call.
///
/// # Errors
///
/// - `ConfigError` for an unknown prompt id, an unreadable template or
///   missing credentials (reported at call time)
/// - `LlmError` for provider failures and timeouts
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Render the prompt registered under `prompt_id` with `context` and ask the model.
    async fn llm(&self, prompt_id: &str, context: &PromptContext) -> StratagemResult<String>;
}

#[async_trait]
impl<T: LlmPort + ?Sized> LlmPort for std::sync::Arc<T> {
    async fn llm(&self, prompt_id: &str, context: &PromptContext) -> StratagemResult<String> {
        (**self).llm(prompt_id, context).await
    }
}

/// Slide rendering back-end.
///
/// The core does not define the file format; each implementation does.
pub trait SlideRenderer {
    /// Write `slides` to `output_path`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the file cannot be encoded or written.
    fn render(&self, slides: &[SlideDescriptor], output_path: &Path) -> StratagemResult<()>;
}
