//! Insights, hypotheses and KPIs: one label per line, fixed length.

use super::ask;
use crate::parsing::parse_labels;
use stratagem_core::{
    Brief, Confidence, Hypothesis, Impact, Insight, Kpi, KpiTrend, SectionId, Trend,
};
use stratagem_error::{StratagemResult, ValidationError};
use stratagem_interface::LlmPort;
use tracing::{instrument, warn};

/// Exactly `cardinality` records: parsed labels first, placeholders after.
fn fit<T>(
    section: SectionId,
    answer: Option<String>,
    cardinality: usize,
    build: impl Fn(String) -> Result<T, ValidationError>,
    placeholder: impl Fn(usize) -> T,
) -> Vec<T> {
    let labels = match answer.as_deref().map(parse_labels) {
        Some(Ok(labels)) => labels,
        Some(Err(e)) => {
            warn!(%section, error = %e, fallback = true, "Unreadable answer");
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut records: Vec<T> = labels
        .into_iter()
        .take(cardinality)
        .filter_map(|label| build(label).ok())
        .collect();
    if records.len() < cardinality {
        warn!(
            %section,
            parsed = records.len(),
            cardinality,
            "Padding section with placeholders"
        );
        let start = records.len() + 1;
        records.extend((start..=cardinality).map(placeholder));
    }
    records
}

/// Generates exactly `cardinality` insights.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "insights", trends = trends.len()))]
pub async fn generate_insights<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
    cardinality: usize,
) -> StratagemResult<Vec<Insight>>
where
    L: LlmPort + ?Sized,
{
    let answer = ask(llm, SectionId::Insights, brief, trends).await?;
    Ok(fit(
        SectionId::Insights,
        answer,
        cardinality,
        |label| Insight::new(label, Vec::new(), Impact::Medium),
        Insight::placeholder,
    ))
}

/// Generates exactly `cardinality` hypotheses.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "hypotheses", trends = trends.len()))]
pub async fn generate_hypotheses<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
    cardinality: usize,
) -> StratagemResult<Vec<Hypothesis>>
where
    L: LlmPort + ?Sized,
{
    let answer = ask(llm, SectionId::Hypotheses, brief, trends).await?;
    Ok(fit(
        SectionId::Hypotheses,
        answer,
        cardinality,
        |label| Hypothesis::new(label, Confidence::Medium, Vec::new()),
        Hypothesis::placeholder,
    ))
}

/// Generates exactly `cardinality` KPIs. Values and targets start at zero.
///
/// # Errors
///
/// Only configuration errors and cancellation propagate.
#[instrument(skip_all, fields(section = "kpis", trends = trends.len()))]
pub async fn generate_kpis<L>(
    llm: &L,
    brief: &Brief,
    trends: &[Trend],
    cardinality: usize,
) -> StratagemResult<Vec<Kpi>>
where
    L: LlmPort + ?Sized,
{
    let answer = ask(llm, SectionId::Kpis, brief, trends).await?;
    Ok(fit(
        SectionId::Kpis,
        answer,
        cardinality,
        |label| Kpi::new(label, 0.0, 0.0, KpiTrend::Stable),
        Kpi::placeholder,
    ))
}
