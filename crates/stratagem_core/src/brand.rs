//! Brand overview section.

use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// Maximum number of competitor actions kept in a brand overview.
pub const TOP_COMPETITOR_ACTIONS: usize = 3;

/// Positioning map: the axes and the brands plotted on them.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct CompetitivePositioning {
    /// Axis labels
    axes: Vec<String>,
    /// Brands placed on the map
    brands: Vec<String>,
}

impl CompetitivePositioning {
    /// Creates a positioning map.
    pub fn new(axes: Vec<String>, brands: Vec<String>) -> Self {
        Self { axes, brands }
    }
}

/// Target audiences.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Persona {
    /// Core audience traits
    primary: Vec<String>,
    /// Secondary audience traits
    secondary: Vec<String>,
}

impl Persona {
    /// Creates a persona description.
    pub fn new(primary: Vec<String>, secondary: Vec<String>) -> Self {
        Self { primary, secondary }
    }
}

/// Brand description, positioning, persona and notable competitor moves.
///
/// `BrandOverview::default()` is the empty overview used as the section fallback.
///
/// # Examples
///
/// ```
/// use stratagem_core::{BrandOverview, CompetitivePositioning, Persona};
///
/// let empty = BrandOverview::default();
/// assert!(empty.is_empty());
///
/// let overview = BrandOverview::new(
///     vec!["Heritage brand".to_string()],
///     CompetitivePositioning::new(vec!["A".to_string()], vec!["B".to_string()]),
///     Persona::default(),
///     vec!["Launched a loyalty app".to_string()],
/// )
/// .unwrap();
/// assert!(!overview.is_empty());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "BrandOverviewRecord")]
pub struct BrandOverview {
    /// Descriptive paragraphs
    description_paragraphs: Vec<String>,
    /// Positioning map
    competitive_positioning: CompetitivePositioning,
    /// Audiences
    persona: Persona,
    /// Up to three competitor actions
    top3_competitor_actions: Vec<String>,
}

impl BrandOverview {
    /// Creates a validated overview.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if more than [`TOP_COMPETITOR_ACTIONS`]
    /// competitor actions are supplied.
    #[track_caller]
    pub fn new(
        description_paragraphs: Vec<String>,
        competitive_positioning: CompetitivePositioning,
        persona: Persona,
        top3_competitor_actions: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if top3_competitor_actions.len() > TOP_COMPETITOR_ACTIONS {
            return Err(ValidationError::new(format!(
                "At most {} competitor actions allowed, got {}",
                TOP_COMPETITOR_ACTIONS,
                top3_competitor_actions.len()
            )));
        }
        Ok(Self {
            description_paragraphs,
            competitive_positioning,
            persona,
            top3_competitor_actions,
        })
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Deserialize)]
struct BrandOverviewRecord {
    description_paragraphs: Vec<String>,
    competitive_positioning: CompetitivePositioning,
    persona: Persona,
    top3_competitor_actions: Vec<String>,
}

impl TryFrom<BrandOverviewRecord> for BrandOverview {
    type Error = ValidationError;

    fn try_from(record: BrandOverviewRecord) -> Result<Self, Self::Error> {
        BrandOverview::new(
            record.description_paragraphs,
            record.competitive_positioning,
            record.persona,
            record.top3_competitor_actions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_four_competitor_actions() {
        let actions = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let result = BrandOverview::new(
            vec![],
            CompetitivePositioning::default(),
            Persona::default(),
            actions,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_serializes_empty_shape() {
        let json = serde_json::to_value(BrandOverview::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description_paragraphs": [],
                "competitive_positioning": {"axes": [], "brands": []},
                "persona": {"primary": [], "secondary": []},
                "top3_competitor_actions": []
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_five_competitor_actions() {
        let json = serde_json::json!({
            "description_paragraphs": [],
            "competitive_positioning": {"axes": [], "brands": []},
            "persona": {"primary": [], "secondary": []},
            "top3_competitor_actions": ["a", "b", "c", "d", "e"]
        });
        assert!(serde_json::from_value::<BrandOverview>(json).is_err());

        let empty = serde_json::to_value(BrandOverview::default()).unwrap();
        assert!(serde_json::from_value::<BrandOverview>(empty).unwrap().is_empty());
    }
}
