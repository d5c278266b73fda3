//! Per-theme state of play, with optional evidence enrichment.

use super::ask;
use crate::parsing::parse_state_of_play_evidence;
use std::collections::HashSet;
use stratagem_core::{Brief, SectionId, StateOfPlaySection, Trend};
use stratagem_error::StratagemResult;
use stratagem_interface::LlmPort;
use tracing::{debug, instrument, warn};

/// One empty section per distinct trend theme, in first-occurrence order.
///
/// # Examples
///
/// ```
/// use stratagem_core::Trend;
/// use stratagem_synthesis::generators::state_of_play;
///
/// let trend = |theme: &str| {
///     Trend::new("web", "t", "s", theme, "sum", "2025-01-01", vec![]).unwrap()
/// };
/// let sections = state_of_play(&[trend("T2"), trend("T1"), trend("T2")]);
/// let themes: Vec<&str> = sections.iter().map(|s| s.theme().as_str()).collect();
/// assert_eq!(themes, vec!["T2", "T1"]);
/// ```
pub fn state_of_play(trends: &[Trend]) -> Vec<StateOfPlaySection> {
    let mut seen = HashSet::new();
    trends
        .iter()
        .map(|trend| trend.theme().as_str())
        .filter(|theme| seen.insert(*theme))
        .filter_map(|theme| StateOfPlaySection::new(theme, Vec::new()).ok())
        .collect()
}

/// Fills section evidence from a second model pass.
///
/// Themes are matched exactly, then case-insensitively. Themes the model
/// invents are ignored; themes it omits keep their current evidence. An
/// unreadable answer changes nothing.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "state_of_play", themes = sections.len()))]
pub async fn enrich_state_of_play<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
    sections: Vec<StateOfPlaySection>,
) -> StratagemResult<Vec<StateOfPlaySection>>
where
    L: LlmPort + ?Sized,
{
    if sections.is_empty() {
        return Ok(sections);
    }
    let Some(answer) = ask(llm, SectionId::StateOfPlay, brief, trends).await? else {
        return Ok(sections);
    };
    let evidence = match parse_state_of_play_evidence(&answer) {
        Ok(evidence) => evidence,
        Err(e) => {
            warn!(error = %e, fallback = true, "Unreadable state of play evidence");
            return Ok(sections);
        }
    };

    let lookup = |theme: &str| {
        evidence
            .iter()
            .find(|(t, _)| t == theme)
            .or_else(|| {
                evidence
                    .iter()
                    .find(|(t, _)| t.trim().eq_ignore_ascii_case(theme.trim()))
            })
            .map(|(_, items)| items.clone())
    };

    Ok(sections
        .into_iter()
        .map(|section| match lookup(section.theme()) {
            Some(items) => {
                debug!(theme = %section.theme(), items = items.len(), "Enriched theme");
                section.with_evidence(items)
            }
            None => section,
        })
        .collect())
}

/// The state of play section: deterministic, enriched when `enrich` is set.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
pub async fn generate_state_of_play<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
    enrich: bool,
) -> StratagemResult<Vec<StateOfPlaySection>>
where
    L: LlmPort + ?Sized,
{
    let sections = state_of_play(trends);
    if enrich {
        enrich_state_of_play(llm, brief, trends, sections).await
    } else {
        Ok(sections)
    }
}
