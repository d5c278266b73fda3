//! Template-driven implementation of the LLM port.

use crate::PromptRegistry;
use async_trait::async_trait;
use std::sync::Arc;
use stratagem_core::{GenerateRequestBuilder, LlmSettings, Message, Role};
use stratagem_error::{LlmError, LlmErrorKind, StratagemResult};
use stratagem_interface::{LlmDriver, LlmPort, PromptContext};
use tracing::{debug, instrument, warn};

/// Appends the delimited context block to a template.
///
/// # Examples
///
/// ```
/// use stratagem_interface::PromptContext;
/// use stratagem_models::render_prompt;
///
/// let mut context = PromptContext::new();
/// context.insert("brief", &serde_json::json!({"title": "Projet Test"})).unwrap();
///
/// let prompt = render_prompt("Return three insights.\n", &context);
/// assert!(prompt.starts_with("Return three insights.\n\n<<<CONTEXT>>>"));
/// assert!(prompt.ends_with("<<<END CONTEXT>>>"));
/// ```
pub fn render_prompt(template: &str, context: &PromptContext) -> String {
    format!("{}\n\n{}", template.trim_end(), context.render_block())
}

/// [`LlmPort`] backed by a [`PromptRegistry`] and an [`LlmDriver`].
///
/// Each call sends one system message, bounded by the configured timeout, and
/// returns the provider text trimmed of surrounding whitespace.
#[derive(Debug)]
pub struct PromptedLlm<D> {
    driver: D,
    registry: Arc<PromptRegistry>,
    settings: LlmSettings,
}

impl<D: LlmDriver> PromptedLlm<D> {
    /// Creates a port over `driver`.
    pub fn new(driver: D, registry: Arc<PromptRegistry>, settings: LlmSettings) -> Self {
        Self {
            driver,
            registry,
            settings,
        }
    }

    /// Underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

#[async_trait]
impl<D: LlmDriver> LlmPort for PromptedLlm<D> {
    #[instrument(
        skip(self, context),
        fields(provider = self.driver.provider_name(), model = %self.settings.model())
    )]
    async fn llm(&self, prompt_id: &str, context: &PromptContext) -> StratagemResult<String> {
        let template = self.registry.template(prompt_id)?;
        let prompt = render_prompt(&template, context);

        let request = GenerateRequestBuilder::default()
            .messages(vec![Message::new(Role::System, prompt)])
            .model(self.settings.model().clone())
            .temperature(*self.settings.temperature() as f32)
            .build()
            .map_err(|e| LlmError::new(LlmErrorKind::RequestBuilding(e.to_string())))?;

        let timeout = self.settings.timeout();
        debug!(?timeout, "Calling provider");

        let response = tokio::time::timeout(timeout, self.driver.generate(&request))
            .await
            .map_err(|_| {
                warn!(?timeout, "Provider call timed out");
                LlmError::new(LlmErrorKind::Timeout { after: timeout })
            })??;

        debug!(
            answered_by = response.model.as_deref().unwrap_or(self.driver.model_name()),
            chars = response.text.len(),
            "Provider answered"
        );
        Ok(response.text.trim().to_string())
    }
}
