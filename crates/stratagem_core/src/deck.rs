//! The deck aggregate root.

use crate::{
    BrandOverview, Brief, BudgetItem, Hypothesis, Idea, Insight, Kpi, Milestone,
    StateOfPlaySection, Trend,
};
use serde::Serialize;
use std::collections::HashSet;
use stratagem_error::InternalError;

/// Generated sections awaiting assembly into a [`Deck`].
///
/// This is the orchestrator's scratch space; nothing here is checked until
/// [`Deck::assemble`] runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckSections {
    /// Brand overview
    pub brand_overview: BrandOverview,
    /// One section per distinct trend theme
    pub state_of_play: Vec<StateOfPlaySection>,
    /// Insights
    pub insights: Vec<Insight>,
    /// Hypotheses
    pub hypotheses: Vec<Hypothesis>,
    /// KPIs
    pub kpis: Vec<Kpi>,
    /// Executive summary
    pub executive_summary: String,
    /// Ideas
    pub ideas: Vec<Idea>,
    /// Timeline
    pub timeline: Vec<Milestone>,
    /// Budget lines
    pub budget: Vec<BudgetItem>,
}

/// The assembled seven-section strategic recommendation.
///
/// A deck only exists once every invariant holds; see [`Deck::assemble`].
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct Deck {
    /// The input brief, echoed back
    brief_reminder: Brief,
    /// The input trends, in order
    trends: Vec<Trend>,
    /// Brand overview
    brand_overview: BrandOverview,
    /// One section per distinct trend theme, in first-occurrence order
    state_of_play: Vec<StateOfPlaySection>,
    /// Insights
    insights: Vec<Insight>,
    /// Hypotheses
    hypotheses: Vec<Hypothesis>,
    /// KPIs
    kpis: Vec<Kpi>,
    /// Executive summary
    executive_summary: String,
    /// Ideas with unique labels
    ideas: Vec<Idea>,
    /// Milestones sorted by deadline
    timeline: Vec<Milestone>,
    /// Budget lines, none negative
    budget: Vec<BudgetItem>,
}

impl Deck {
    /// Assembles a deck in a single step and checks every deck invariant.
    ///
    /// `cardinality` is the configured length of the insight, hypothesis and
    /// KPI sections.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError`] naming the first broken invariant.
    #[track_caller]
    pub fn assemble(
        brief: &Brief,
        trends: &[Trend],
        sections: DeckSections,
        cardinality: usize,
    ) -> Result<Self, InternalError> {
        let deck = Self {
            brief_reminder: brief.clone(),
            trends: trends.to_vec(),
            brand_overview: sections.brand_overview,
            state_of_play: sections.state_of_play,
            insights: sections.insights,
            hypotheses: sections.hypotheses,
            kpis: sections.kpis,
            executive_summary: sections.executive_summary,
            ideas: sections.ideas,
            timeline: sections.timeline,
            budget: sections.budget,
        };
        deck.check_invariants(brief, trends, cardinality)?;
        Ok(deck)
    }

    #[track_caller]
    fn check_invariants(
        &self,
        brief: &Brief,
        trends: &[Trend],
        cardinality: usize,
    ) -> Result<(), InternalError> {
        if &self.brief_reminder != brief {
            return Err(InternalError::new("Brief reminder differs from the input brief"));
        }
        if self.trends != trends {
            return Err(InternalError::new("Deck trends differ from the input trends"));
        }

        let expected_themes = distinct_themes(trends);
        let actual_themes: Vec<&str> = self
            .state_of_play
            .iter()
            .map(|section| section.theme().as_str())
            .collect();
        if actual_themes != expected_themes {
            return Err(InternalError::new(format!(
                "State of play themes {:?} do not match trend themes {:?}",
                actual_themes, expected_themes
            )));
        }

        let lengths = (self.insights.len(), self.hypotheses.len(), self.kpis.len());
        if lengths != (cardinality, cardinality, cardinality) {
            return Err(InternalError::new(format!(
                "Expected {} insights/hypotheses/KPIs, got {:?}",
                cardinality, lengths
            )));
        }

        let mut labels = HashSet::new();
        for idea in &self.ideas {
            if !labels.insert(idea.label().as_str()) {
                return Err(InternalError::new(format!(
                    "Duplicate idea label '{}'",
                    idea.label()
                )));
            }
        }

        if self
            .timeline
            .windows(2)
            .any(|pair| pair[0].deadline() > pair[1].deadline())
        {
            return Err(InternalError::new("Timeline is not sorted by deadline"));
        }

        if let Some(item) = self.budget.iter().find(|item| *item.estimate() < 0.0) {
            return Err(InternalError::new(format!(
                "Budget line '{}' has a negative estimate",
                item.category()
            )));
        }

        Ok(())
    }

    /// Distinct trend themes in first-occurrence order.
    pub fn themes(&self) -> Vec<&str> {
        distinct_themes(&self.trends)
    }
}

/// Distinct themes of `trends`, in first-occurrence order.
fn distinct_themes(trends: &[Trend]) -> Vec<&str> {
    let mut seen = HashSet::new();
    trends
        .iter()
        .map(|trend| trend.theme().as_str())
        .filter(|theme| seen.insert(*theme))
        .collect()
}
