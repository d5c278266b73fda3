//! Insights, hypotheses and KPIs.
//!
//! The three records share a shape but play different roles in the deck, so
//! they are distinct types with their own placeholder labels.

use crate::validate::{finite, non_empty};
use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// Expected business impact of an insight.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Impact {
    /// Marginal effect
    Low,
    /// Noticeable effect
    #[default]
    Medium,
    /// Decisive effect
    High,
}

/// Confidence attached to a hypothesis.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Confidence {
    /// Speculative
    Low,
    /// Plausible
    #[default]
    Medium,
    /// Well supported
    High,
}

/// Direction a KPI is expected to move.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KpiTrend {
    /// Increasing
    Up,
    /// Decreasing
    Down,
    /// Flat
    #[default]
    Stable,
}

/// A strategic insight drawn from the trends.
///
/// # Examples
///
/// ```
/// use stratagem_core::{Impact, Insight};
///
/// let insight = Insight::new("Gen Z buys on TikTok", vec![], Impact::High).unwrap();
/// assert_eq!(insight.label(), "Gen Z buys on TikTok");
///
/// let padded = Insight::placeholder(2);
/// assert_eq!(padded.label(), "Insight 2");
/// assert_eq!(*padded.impact(), Impact::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "InsightRecord")]
pub struct Insight {
    /// Statement of the insight
    label: String,
    /// Supporting citations
    evidence: Vec<String>,
    /// Expected impact
    impact: Impact,
}

impl Insight {
    /// Creates a validated insight.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the label is empty.
    #[track_caller]
    pub fn new(
        label: impl Into<String>,
        evidence: Vec<String>,
        impact: Impact,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        non_empty("Insight label", &label)?;
        Ok(Self {
            label,
            evidence,
            impact,
        })
    }

    /// Padding record for position `index` (1-based).
    pub fn placeholder(index: usize) -> Self {
        Self {
            label: format!("Insight {}", index),
            evidence: Vec::new(),
            impact: Impact::Medium,
        }
    }
}

/// A testable hypothesis for the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "HypothesisRecord")]
pub struct Hypothesis {
    /// Statement of the hypothesis
    label: String,
    /// Confidence level
    confidence: Confidence,
    /// How the hypothesis would be validated
    validation: Vec<String>,
}

impl Hypothesis {
    /// Creates a validated hypothesis.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the label is empty.
    #[track_caller]
    pub fn new(
        label: impl Into<String>,
        confidence: Confidence,
        validation: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        non_empty("Hypothesis label", &label)?;
        Ok(Self {
            label,
            confidence,
            validation,
        })
    }

    /// Padding record for position `index` (1-based).
    pub fn placeholder(index: usize) -> Self {
        Self {
            label: format!("Hypothesis {}", index),
            confidence: Confidence::Medium,
            validation: Vec::new(),
        }
    }
}

/// A key performance indicator with current value and target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "KpiRecord")]
pub struct Kpi {
    /// Indicator name
    label: String,
    /// Current value
    value: f64,
    /// Target value
    target: f64,
    /// Expected direction
    trend: KpiTrend,
}

impl Kpi {
    /// Creates a validated KPI.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the label is empty or a number is not finite.
    #[track_caller]
    pub fn new(
        label: impl Into<String>,
        value: f64,
        target: f64,
        trend: KpiTrend,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        non_empty("KPI label", &label)?;
        finite("KPI value", value)?;
        finite("KPI target", target)?;
        Ok(Self {
            label,
            value,
            target,
            trend,
        })
    }

    /// Padding record for position `index` (1-based).
    pub fn placeholder(index: usize) -> Self {
        Self {
            label: format!("KPI {}", index),
            value: 0.0,
            target: 0.0,
            trend: KpiTrend::Stable,
        }
    }
}

// Wire forms. Deserialization goes through the validating constructors.

#[derive(Deserialize)]
struct InsightRecord {
    label: String,
    #[serde(default)]
    evidence: Vec<String>,
    #[serde(default)]
    impact: Impact,
}

impl TryFrom<InsightRecord> for Insight {
    type Error = ValidationError;

    fn try_from(record: InsightRecord) -> Result<Self, Self::Error> {
        Insight::new(record.label, record.evidence, record.impact)
    }
}

#[derive(Deserialize)]
struct HypothesisRecord {
    label: String,
    #[serde(default)]
    confidence: Confidence,
    #[serde(default)]
    validation: Vec<String>,
}

impl TryFrom<HypothesisRecord> for Hypothesis {
    type Error = ValidationError;

    fn try_from(record: HypothesisRecord) -> Result<Self, Self::Error> {
        Hypothesis::new(record.label, record.confidence, record.validation)
    }
}

#[derive(Deserialize)]
struct KpiRecord {
    label: String,
    #[serde(default)]
    value: f64,
    #[serde(default)]
    target: f64,
    #[serde(default)]
    trend: KpiTrend,
}

impl TryFrom<KpiRecord> for Kpi {
    type Error = ValidationError;

    fn try_from(record: KpiRecord) -> Result<Self, Self::Error> {
        Kpi::new(record.label, record.value, record.target, record.trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_levels_parse_case_insensitively() {
        assert_eq!(Impact::from_str("HIGH").unwrap(), Impact::High);
        assert_eq!(Confidence::from_str("low").unwrap(), Confidence::Low);
        assert_eq!(KpiTrend::from_str("Stable").unwrap(), KpiTrend::Stable);
        assert_eq!(Impact::High.to_string(), "high");
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert!(Insight::new("", vec![], Impact::Low).is_err());
        assert!(Hypothesis::new("", Confidence::Low, vec![]).is_err());
        assert!(Kpi::new("", 0.0, 0.0, KpiTrend::Up).is_err());
    }

    #[test]
    fn test_kpi_rejects_nan() {
        assert!(Kpi::new("Reach", f64::NAN, 1.0, KpiTrend::Up).is_err());
        assert!(Kpi::new("Reach", 1.0, f64::INFINITY, KpiTrend::Up).is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Hypothesis::placeholder(3).label(), "Hypothesis 3");
        let kpi = Kpi::placeholder(1);
        assert_eq!(kpi.label(), "KPI 1");
        assert_eq!(*kpi.value(), 0.0);
        assert_eq!(*kpi.target(), 0.0);
        assert_eq!(*kpi.trend(), KpiTrend::Stable);
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let insight = r#"{"label":"","evidence":[],"impact":"high"}"#;
        assert!(serde_json::from_str::<Insight>(insight).is_err());
        let hypothesis = r#"{"label":"","confidence":"low","validation":[]}"#;
        assert!(serde_json::from_str::<Hypothesis>(hypothesis).is_err());
        let kpi = r#"{"label":"","value":0.0,"target":1.0,"trend":"up"}"#;
        assert!(serde_json::from_str::<Kpi>(kpi).is_err());

        let kpi = r#"{"label":"Reach","value":1.0,"target":2.0,"trend":"up"}"#;
        let kpi: Kpi = serde_json::from_str(kpi).unwrap();
        assert_eq!(*kpi.trend(), KpiTrend::Up);
    }
}
