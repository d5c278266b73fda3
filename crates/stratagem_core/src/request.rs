//! Request and response types for provider calls.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-agnostic generation request.
///
/// # Examples
///
/// ```
/// use stratagem_core::{GenerateRequestBuilder, Message, Role};
///
/// let request = GenerateRequestBuilder::default()
///     .messages(vec![Message::new(Role::System, "Hello")])
///     .temperature(0.7_f32)
///     .model("gpt-4")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

/// Text returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, untrimmed
    pub text: String,
    /// Model that actually answered, when the provider reports it
    pub model: Option<String>,
}
