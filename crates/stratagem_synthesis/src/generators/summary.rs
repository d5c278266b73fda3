//! Executive summary: the whole answer, or a stock sentence.

use super::ask;
use stratagem_core::{Brief, SectionId, Trend};
use stratagem_error::StratagemResult;
use stratagem_interface::LlmPort;
use tracing::{instrument, warn};

/// Summary used when the model returns nothing.
pub const EXECUTIVE_SUMMARY_FALLBACK: &str =
    "Voici un résumé concis de la recommandation stratégique.";

/// Generates the executive summary.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "executive_summary"))]
pub async fn generate_executive_summary<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<String>
where
    L: LlmPort + ?Sized,
{
    let answer = ask(llm, SectionId::ExecutiveSummary, brief, trends).await?;
    match answer.as_deref().map(str::trim) {
        Some(summary) if !summary.is_empty() => Ok(summary.to_string()),
        _ => {
            warn!(fallback = true, "Empty executive summary");
            Ok(EXECUTIVE_SUMMARY_FALLBACK.to_string())
        }
    }
}
