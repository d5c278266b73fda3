//! The reformulated client brief.

use crate::validate::non_empty;
use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// A marketing client brief reformulated into structured form.
///
/// # Examples
///
/// ```
/// use stratagem_core::Brief;
///
/// let brief = Brief::new(
///     "Projet Test",
///     vec!["Obj1".to_string(), "Obj2".to_string()],
///     "Reformulation",
///     "Résumé",
/// )
/// .unwrap();
///
/// assert_eq!(brief.title(), "Projet Test");
/// assert_eq!(brief.objectives().len(), 2);
///
/// assert!(Brief::new("Projet Test", vec![], "", "Résumé").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "BriefRecord")]
pub struct Brief {
    /// Brief title
    title: String,
    /// Ordered client objectives (at least one)
    objectives: Vec<String>,
    /// Agency-side reformulation of the ask, may be empty
    internal_reformulation: String,
    /// Short summary of the brief
    summary: String,
}

impl Brief {
    /// Creates a validated brief.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the title or summary is empty, if there
    /// are no objectives, or if any objective is empty.
    #[track_caller]
    pub fn new(
        title: impl Into<String>,
        objectives: Vec<String>,
        internal_reformulation: impl Into<String>,
        summary: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let summary = summary.into();
        non_empty("Brief title", &title)?;
        non_empty("Brief summary", &summary)?;
        if objectives.is_empty() {
            return Err(ValidationError::new(
                "Brief must list at least one objective",
            ));
        }
        for (idx, objective) in objectives.iter().enumerate() {
            non_empty(&format!("Brief objective #{}", idx + 1), objective)?;
        }

        Ok(Self {
            title,
            objectives,
            internal_reformulation: internal_reformulation.into(),
            summary,
        })
    }

    /// Whether the brief carries enough substance to describe the brand.
    ///
    /// Construction only rejects empty strings, so a title or objective list made
    /// of whitespace still passes validation but gives the model nothing to work
    /// with.
    pub fn has_brand_context(&self) -> bool {
        !self.title.trim().is_empty() && self.objectives.iter().any(|o| !o.trim().is_empty())
    }
}

/// Unvalidated wire form of a [`Brief`], as read from JSON or TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BriefRecord {
    /// Brief title
    pub title: String,
    /// Ordered client objectives
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Agency-side reformulation
    #[serde(default)]
    pub internal_reformulation: String,
    /// Short summary
    pub summary: String,
}

impl TryFrom<BriefRecord> for Brief {
    type Error = ValidationError;

    fn try_from(record: BriefRecord) -> Result<Self, Self::Error> {
        Brief::new(
            record.title,
            record.objectives,
            record.internal_reformulation,
            record.summary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objectives() -> Vec<String> {
        vec!["Obj1".to_string()]
    }

    #[test]
    fn test_rejects_empty_title() {
        assert!(Brief::new("", objectives(), "", "Résumé").is_err());
    }

    #[test]
    fn test_rejects_empty_summary() {
        assert!(Brief::new("Titre", objectives(), "", "").is_err());
    }

    #[test]
    fn test_rejects_empty_objective() {
        let err = Brief::new("Titre", vec!["A".into(), String::new()], "", "Résumé").unwrap_err();
        assert!(err.message.contains("#2"));
    }

    #[test]
    fn test_allows_empty_reformulation() {
        let brief = Brief::new("Titre", objectives(), "", "Résumé").unwrap();
        assert!(brief.internal_reformulation().is_empty());
    }

    #[test]
    fn test_whitespace_title_has_no_brand_context() {
        let brief = Brief::new("   ", objectives(), "", "Résumé").unwrap();
        assert!(!brief.has_brand_context());

        let brief = Brief::new("Titre", vec!["  ".into()], "", "Résumé").unwrap();
        assert!(!brief.has_brand_context());

        let brief = Brief::new("Titre", objectives(), "", "Résumé").unwrap();
        assert!(brief.has_brand_context());
    }
}
