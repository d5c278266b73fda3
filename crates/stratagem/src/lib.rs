//! Stratagem - strategic recommendation decks from a brief and market trends.
//!
//! Stratagem takes a reformulated client [`Brief`] and the [`Trend`] signals
//! gathered by upstream scrapers and produces a seven-section [`Deck`]:
//! brand overview, state of play per theme, insights, hypotheses, KPIs,
//! executive summary, ideas, timeline and budget. Each section comes from one
//! constrained LLM call whose answer is parsed into typed records; a failing
//! call degrades the section instead of failing the deck.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stratagem::{
//!     Brief, OpenAiClient, PromptRegistry, PromptedLlm, Recommender, SlideMapper,
//!     StratagemConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = StratagemConfig::load()?;
//!     let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY").ok(), config.llm().model());
//!     let registry = Arc::new(PromptRegistry::new(config.prompts().directory()));
//!     let llm = PromptedLlm::new(client, registry, config.llm().clone());
//!
//!     let brief = Brief::new("Projet Test", vec!["Obj1".into()], "", "Résumé")?;
//!     let deck = Recommender::from_config(llm, &config)
//!         .generate_recommendation(&brief, &[])
//!         .await?;
//!
//!     let slides = SlideMapper::new(config.slides().clone()).map(&deck);
//!     println!("{} slides", slides.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Stratagem is organized as a workspace with focused crates:
//!
//! - `stratagem_error` - Error taxonomy
//! - `stratagem_core` - Domain model, configuration and provider request types
//! - `stratagem_interface` - `LlmDriver`, `LlmPort` and `SlideRenderer` traits
//! - `stratagem_models` - Prompt registry and the OpenAI-compatible driver
//! - `stratagem_synthesis` - Parsers, section generators and the orchestrator
//! - `stratagem_slides` - Slide mapping and renderers
//!
//! This crate (`stratagem`) re-exports everything for convenience.

pub use stratagem_core::*;
pub use stratagem_error::*;
pub use stratagem_interface::*;
pub use stratagem_models::*;
pub use stratagem_slides::*;
pub use stratagem_synthesis::*;
