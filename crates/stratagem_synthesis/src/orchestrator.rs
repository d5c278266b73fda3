//! Recommendation orchestrator.

use crate::generators::{
    generate_brand_overview, generate_budget, generate_executive_summary, generate_hypotheses,
    generate_ideas, generate_insights, generate_kpis, generate_state_of_play, generate_timeline,
};
use std::future::Future;
use stratagem_core::{
    Brief, BriefRecord, Deck, DeckSections, SectionId, SectionSettings, StratagemConfig, Trend,
    TrendRecord,
};
use stratagem_error::{CancelledError, StratagemResult};
use stratagem_interface::LlmPort;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Produces a [`Deck`] from a brief and its trends.
///
/// Sections are generated in four stages:
///
/// 1. insights, hypotheses, KPIs, executive summary
/// 2. ideas, timeline, budget
/// 3. brand overview
/// 4. state of play
///
/// Generators inside a stage run concurrently on the calling task and are
/// started in the order listed. The deck is assembled once every section is
/// ready; a partial deck is never returned.
///
/// # Example
///
/// ```no_run
/// use stratagem_core::{Brief, StratagemConfig};
/// use stratagem_interface::LlmPort;
/// use stratagem_synthesis::Recommender;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run(llm: impl LlmPort, brief: Brief) -> stratagem_error::StratagemResult<()> {
/// let recommender = Recommender::from_config(llm, &StratagemConfig::default());
/// let cancel = CancellationToken::new();
/// let deck = recommender
///     .generate_recommendation_with_cancel(&brief, &[], &cancel)
///     .await?;
/// println!("{}", deck.executive_summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Recommender<L> {
    llm: L,
    sections: SectionSettings,
}

impl<L: LlmPort> Recommender<L> {
    /// Creates an orchestrator over `llm`.
    pub fn new(llm: L, sections: SectionSettings) -> Self {
        Self { llm, sections }
    }

    /// Creates an orchestrator using the section settings of `config`.
    pub fn from_config(llm: L, config: &StratagemConfig) -> Self {
        Self::new(llm, config.sections().clone())
    }

    /// The LLM port in use.
    pub fn llm(&self) -> &L {
        &self.llm
    }

    /// Generates the full recommendation deck.
    ///
    /// # Errors
    ///
    /// - `ConfigError` when a prompt is missing or credentials are absent
    /// - `InternalError` when the assembled deck breaks an invariant
    ///
    /// Provider failures never surface; affected sections fall back.
    pub async fn generate_recommendation(
        &self,
        brief: &Brief,
        trends: &[Trend],
    ) -> StratagemResult<Deck> {
        self.generate_recommendation_with_cancel(brief, trends, &CancellationToken::new())
            .await
    }

    /// Validates raw upstream records, then generates the deck.
    ///
    /// # Errors
    ///
    /// `ValidationError` for a malformed brief or trend, otherwise as
    /// [`Recommender::generate_recommendation`].
    pub async fn generate_from_records(
        &self,
        brief: BriefRecord,
        trends: Vec<TrendRecord>,
    ) -> StratagemResult<Deck> {
        let brief = Brief::try_from(brief)?;
        let trends = trends
            .into_iter()
            .map(Trend::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.generate_recommendation(&brief, &trends).await
    }

    /// Generates the deck, aborting when `cancel` fires.
    ///
    /// The token is checked before each generator starts and raced against
    /// every generator in flight, so an outstanding model call is dropped as
    /// soon as cancellation is requested.
    ///
    /// # Errors
    ///
    /// `CancelledError` on cancellation, otherwise as
    /// [`Recommender::generate_recommendation`].
    #[instrument(
        skip_all,
        fields(brief = %brief.title(), trends = trends.len(), cardinality = self.sections.cardinality())
    )]
    pub async fn generate_recommendation_with_cancel(
        &self,
        brief: &Brief,
        trends: &[Trend],
        cancel: &CancellationToken,
    ) -> StratagemResult<Deck> {
        let llm = &self.llm;
        let cardinality = *self.sections.cardinality();

        info!("Stage 1: insights, hypotheses, KPIs, executive summary");
        let (insights, hypotheses, kpis, executive_summary) = futures::try_join!(
            guarded(
                SectionId::Insights,
                cancel,
                generate_insights(llm, brief, trends, cardinality)
            ),
            guarded(
                SectionId::Hypotheses,
                cancel,
                generate_hypotheses(llm, brief, trends, cardinality)
            ),
            guarded(
                SectionId::Kpis,
                cancel,
                generate_kpis(llm, brief, trends, cardinality)
            ),
            guarded(
                SectionId::ExecutiveSummary,
                cancel,
                generate_executive_summary(llm, brief, trends)
            ),
        )?;

        info!("Stage 2: ideas, timeline, budget");
        let (ideas, timeline, budget) = futures::try_join!(
            guarded(SectionId::Ideas, cancel, generate_ideas(llm, brief, trends)),
            guarded(SectionId::Timeline, cancel, generate_timeline(llm, brief, trends)),
            guarded(SectionId::Budget, cancel, generate_budget(llm, brief, trends)),
        )?;

        info!("Stage 3: brand overview");
        let brand_overview = guarded(
            SectionId::BrandOverview,
            cancel,
            generate_brand_overview(llm, brief, trends),
        )
        .await?;

        info!("Stage 4: state of play");
        let state_of_play = guarded(
            SectionId::StateOfPlay,
            cancel,
            generate_state_of_play(llm, brief, trends, *self.sections.enrich_state_of_play()),
        )
        .await?;

        let sections = DeckSections {
            brand_overview,
            state_of_play,
            insights,
            hypotheses,
            kpis,
            executive_summary,
            ideas,
            timeline,
            budget,
        };

        let deck = Deck::assemble(brief, trends, sections, cardinality)?;
        info!(
            ideas = deck.ideas().len(),
            milestones = deck.timeline().len(),
            budget_lines = deck.budget().len(),
            themes = deck.state_of_play().len(),
            "Deck assembled"
        );
        Ok(deck)
    }
}

/// Runs `generator` unless `cancel` has fired, and abandons it if `cancel`
/// fires first.
async fn guarded<T, F>(section: SectionId, cancel: &CancellationToken, generator: F) -> StratagemResult<T>
where
    F: Future<Output = StratagemResult<T>>,
{
    if cancel.is_cancelled() {
        debug!(%section, "Cancelled before start");
        return Err(CancelledError::new(section.as_ref()).into());
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(%section, "Cancelled in flight");
            Err(CancelledError::new(section.as_ref()).into())
        }
        result = generator => result,
    }
}
