//! Per-theme state of play.

use crate::validate::non_empty;
use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// What the market looks like for one trend theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "StateOfPlayRecord")]
pub struct StateOfPlaySection {
    /// Theme shared by one or more trends
    theme: String,
    /// Observations supporting the theme, may be empty
    evidence: Vec<String>,
}

impl StateOfPlaySection {
    /// Creates a validated section.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the theme is empty.
    #[track_caller]
    pub fn new(theme: impl Into<String>, evidence: Vec<String>) -> Result<Self, ValidationError> {
        let theme = theme.into();
        non_empty("State of play theme", &theme)?;
        Ok(Self { theme, evidence })
    }

    /// Returns a copy of this section carrying `evidence`.
    pub fn with_evidence(&self, evidence: Vec<String>) -> Self {
        Self {
            theme: self.theme.clone(),
            evidence,
        }
    }
}

#[derive(Deserialize)]
struct StateOfPlayRecord {
    theme: String,
    #[serde(default)]
    evidence: Vec<String>,
}

impl TryFrom<StateOfPlayRecord> for StateOfPlaySection {
    type Error = ValidationError;

    fn try_from(record: StateOfPlayRecord) -> Result<Self, Self::Error> {
        StateOfPlaySection::new(record.theme, record.evidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_rejected_on_deserialize() {
        let json = r#"{"theme":"","evidence":["x"]}"#;
        assert!(serde_json::from_str::<StateOfPlaySection>(json).is_err());

        let section: StateOfPlaySection =
            serde_json::from_str(r#"{"theme":"ASMR","evidence":[]}"#).unwrap();
        assert_eq!(section.theme(), "ASMR");
    }
}
