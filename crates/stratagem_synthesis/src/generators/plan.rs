//! Ideas, timeline and budget. Length is whatever the model produced.

use super::ask;
use crate::parsing::{parse_budget, parse_ideas, parse_timeline};
use stratagem_core::{Brief, BudgetItem, Idea, Milestone, SectionId, Trend};
use stratagem_error::StratagemResult;
use stratagem_interface::LlmPort;
use tracing::{debug, instrument};

/// Generates creative ideas with unique labels.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "ideas"))]
pub async fn generate_ideas<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<Vec<Idea>>
where
    L: LlmPort + ?Sized,
{
    let ideas = ask(llm, SectionId::Ideas, brief, trends)
        .await?
        .map(|answer| parse_ideas(&answer))
        .unwrap_or_default();
    debug!(count = ideas.len(), "Parsed ideas");
    Ok(ideas)
}

/// Generates the timeline, sorted by deadline.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "timeline"))]
pub async fn generate_timeline<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<Vec<Milestone>>
where
    L: LlmPort + ?Sized,
{
    let timeline = ask(llm, SectionId::Timeline, brief, trends)
        .await?
        .map(|answer| parse_timeline(&answer))
        .unwrap_or_default();
    debug!(count = timeline.len(), "Parsed milestones");
    Ok(timeline)
}

/// Generates budget lines; none is negative.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "budget"))]
pub async fn generate_budget<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
) -> StratagemResult<Vec<BudgetItem>>
where
    L: LlmPort + ?Sized,
{
    let budget = ask(llm, SectionId::Budget, brief, trends)
        .await?
        .map(|answer| parse_budget(&answer))
        .unwrap_or_default();
    debug!(count = budget.len(), "Parsed budget lines");
    Ok(budget)
}
