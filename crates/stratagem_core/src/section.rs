//! Deck section identifiers.

use serde::{Deserialize, Serialize};

/// Identifies a deck section and, through the prompt registry, its template.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use stratagem_core::SectionId;
///
/// assert_eq!(SectionId::ExecutiveSummary.to_string(), "executive_summary");
/// assert_eq!(SectionId::from_str("kpis").unwrap(), SectionId::Kpis);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SectionId {
    /// Strategic insights
    Insights,
    /// Campaign hypotheses
    Hypotheses,
    /// Key performance indicators
    Kpis,
    /// One-paragraph summary
    ExecutiveSummary,
    /// Creative ideas
    Ideas,
    /// Dated milestones
    Timeline,
    /// Budget lines
    Budget,
    /// Brand description, positioning and persona (JSON mode)
    BrandOverview,
    /// Evidence enrichment for the per-theme state of play
    StateOfPlay,
}
