//! Brand overview (JSON answer).

use super::ask;
use crate::parsing::parse_brand_overview;
use stratagem_core::{BrandOverview, Brief, SectionId, Trend};
use stratagem_error::StratagemResult;
use stratagem_interface::LlmPort;
use tracing::{debug, instrument, warn};

/// Generates the brand overview.
///
/// Returns the empty overview without calling the model when the brief has no
/// usable title or objectives, and when the answer is not the expected JSON
/// object.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "brand_overview"))]
pub async fn generate_brand_overview<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<BrandOverview>
where
    L: LlmPort + ?Sized,
{
    if !brief.has_brand_context() {
        debug!(fallback = true, "Brief has no brand context, skipping model call");
        return Ok(BrandOverview::default());
    }

    let Some(answer) = ask(llm, SectionId::BrandOverview, brief, trends).await? else {
        return Ok(BrandOverview::default());
    };

    match parse_brand_overview(&answer) {
        Ok(overview) => Ok(overview),
        Err(e) => {
            warn!(error = %e, fallback = true, "Unreadable brand overview");
            Ok(BrandOverview::default())
        }
    }
}
