//! Section generators.
//!
//! Each generator builds a context from the brief and the trends (nothing
//! else), asks the model with its section prompt, parses the answer and
//! enforces the section contract. Provider failures and unreadable answers turn
//! into the documented fallback; configuration errors and cancellation are
//! returned unchanged.

mod analysis;
mod brand;
mod plan;
mod state_of_play;
mod summary;

pub use analysis::{generate_hypotheses, generate_insights, generate_kpis};
pub use brand::generate_brand_overview;
pub use plan::{generate_budget, generate_ideas, generate_timeline};
pub use state_of_play::{enrich_state_of_play, generate_state_of_play, state_of_play};
pub use summary::{EXECUTIVE_SUMMARY_FALLBACK, generate_executive_summary};

use stratagem_core::{Brief, SectionId, Trend};
use stratagem_error::StratagemResult;
use stratagem_interface::{LlmPort, PromptContext};
use tracing::{debug, warn};

/// Context sent with every section prompt: `brief` and `trends`, nothing else.
///
/// # Errors
///
/// Returns `InternalError` if either value fails to serialize.
pub fn section_context(brief: &Brief, trends: &[Trend]) -> StratagemResult<PromptContext> {
    let mut context = PromptContext::new();
    context.insert("brief", brief)?;
    context.insert("trends", trends)?;
    Ok(context)
}

/// Asks the model for `section`.
///
/// `Ok(None)` means the provider failed in a way the section absorbs.
pub(crate) async fn ask<L>(
    llm: &L,
    section: SectionId,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<Option<String>>
where
    L: LlmPort + ?Sized,
{
    let context = section_context(brief, trends)?;
    match llm.llm(section.as_ref(), &context).await {
        Ok(answer) => {
            debug!(%section, answer_len = answer.len(), "Model answered");
            Ok(Some(answer))
        }
        Err(e) if e.is_recoverable() => {
            warn!(%section, error = %e, fallback = true, "Model call failed");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
