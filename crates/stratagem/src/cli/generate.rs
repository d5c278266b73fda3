//! Deck generation command handler.

use super::commands::{GenerateArgs, SlideFormat};
use super::load_config;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use stratagem::{
    Brief, JsonSlideRenderer, MarkdownSlideRenderer, OpenAiClient, PromptRegistry, PromptedLlm,
    Recommender, RenderError, SlideMapper, SlideRenderer, StratagemResult, Trend,
    ValidationError,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

fn read_json<T: DeserializeOwned>(what: &str, path: &Path) -> StratagemResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ValidationError::new(format!("Failed to read {} from {}: {}", what, path.display(), e))
    })?;
    let value = serde_json::from_str(&text).map_err(|e| {
        ValidationError::new(format!("Invalid {} in {}: {}", what, path.display(), e))
    })?;
    Ok(value)
}

/// Generates a deck from the brief and trend files and renders its slides.
///
/// Ctrl-C cancels the run; no slide file is written in that case.
#[instrument(skip_all, fields(brief = %args.brief.display(), slides = %args.slides.display()))]
pub async fn run_generate(args: GenerateArgs) -> StratagemResult<()> {
    let config = load_config(args.config.as_deref())?;
    let brief: Brief = read_json("brief", &args.brief)?;
    let trends: Vec<Trend> = read_json("trends", &args.trends)?;
    info!(title = %brief.title(), trends = trends.len(), "Loaded inputs");

    let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY").ok(), config.llm().model())
        .with_endpoint(config.llm().base_url());
    let registry = Arc::new(PromptRegistry::new(config.prompts().directory()));
    let llm = PromptedLlm::new(client, registry, config.llm().clone());
    let recommender = Recommender::from_config(llm, &config);

    let cancel = CancellationToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling");
                cancel.cancel();
            }
        }
    });

    let result = recommender
        .generate_recommendation_with_cancel(&brief, &trends, &cancel)
        .await;
    watcher.abort();
    let deck = result?;

    if let Some(deck_path) = &args.deck {
        let json = serde_json::to_string_pretty(&deck)
            .map_err(|e| RenderError::new(format!("Failed to encode deck: {}", e)))?;
        std::fs::write(deck_path, json).map_err(|e| {
            RenderError::new(format!("Failed to write {}: {}", deck_path.display(), e))
        })?;
        info!(path = %deck_path.display(), "Wrote deck");
    }

    let slides = SlideMapper::new(config.slides().clone()).map(&deck);
    match args.format {
        SlideFormat::Json => JsonSlideRenderer.render(&slides, &args.slides)?,
        SlideFormat::Markdown => MarkdownSlideRenderer.render(&slides, &args.slides)?,
    }

    info!(slides = slides.len(), "Recommendation complete");
    Ok(())
}
