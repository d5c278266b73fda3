//! Observed market and social signals.

use crate::validate::non_empty;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// Parses an ISO-8601 calendar date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date component is kept
/// (scrapers usually report publication times).
///
/// # Errors
///
/// Returns [`ValidationError`] when the text is neither form.
///
/// # Examples
///
/// ```
/// use stratagem_core::parse_iso_date;
///
/// let date = parse_iso_date("2025-03-01").unwrap();
/// assert_eq!(date.to_string(), "2025-03-01");
///
/// let date = parse_iso_date("2025-03-01T09:30:00+01:00").unwrap();
/// assert_eq!(date.to_string(), "2025-03-01");
///
/// assert!(parse_iso_date("01/03/2025").is_err());
/// ```
#[track_caller]
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    Err(ValidationError::new(format!(
        "'{}' is not an ISO-8601 calendar date",
        raw
    )))
}

/// A single observed signal, grouped with its peers by `theme`.
///
/// # Examples
///
/// ```
/// use stratagem_core::Trend;
///
/// let trend = Trend::new(
///     "tiktok",
///     "Unboxing ASMR",
///     "Creators film silent unboxings",
///     "ASMR",
///     "Silent unboxing videos are spreading",
///     "2025-02-14",
///     vec!["https://example.com/post/1".to_string()],
/// )
/// .unwrap();
///
/// assert_eq!(trend.theme(), "ASMR");
/// assert_eq!(trend.date().to_string(), "2025-02-14");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "TrendRecord")]
pub struct Trend {
    /// Platform or feed the signal came from
    source: String,
    /// Headline of the item
    title: String,
    /// Raw excerpt
    snippet: String,
    /// Grouping theme
    theme: String,
    /// One-line interpretation
    summary: String,
    /// Publication date
    date: NaiveDate,
    /// URLs or citations backing the signal
    evidence: Vec<String>,
}

impl Trend {
    /// Creates a validated trend.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any text field is empty or the date is
    /// not an ISO-8601 calendar date.
    #[track_caller]
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
        theme: impl Into<String>,
        summary: impl Into<String>,
        date: &str,
        evidence: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let source = source.into();
        let title = title.into();
        let snippet = snippet.into();
        let theme = theme.into();
        let summary = summary.into();
        non_empty("Trend source", &source)?;
        non_empty("Trend title", &title)?;
        non_empty("Trend snippet", &snippet)?;
        non_empty("Trend theme", &theme)?;
        non_empty("Trend summary", &summary)?;
        let date = parse_iso_date(date)?;

        Ok(Self {
            source,
            title,
            snippet,
            theme,
            summary,
            date,
            evidence,
        })
    }
}

/// Unvalidated wire form of a [`Trend`], as delivered by the scrapers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Platform tag
    pub source: String,
    /// Headline
    pub title: String,
    /// Raw excerpt
    pub snippet: String,
    /// Grouping theme
    pub theme: String,
    /// Interpretation
    pub summary: String,
    /// Date as text
    pub date: String,
    /// Citations
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl TryFrom<TrendRecord> for Trend {
    type Error = ValidationError;

    fn try_from(record: TrendRecord) -> Result<Self, Self::Error> {
        Trend::new(
            record.source,
            record.title,
            record.snippet,
            record.theme,
            record.summary,
            &record.date,
            record.evidence,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrendRecord {
        TrendRecord {
            source: "instagram".into(),
            title: "Title".into(),
            snippet: "Snippet".into(),
            theme: "T1".into(),
            summary: "Summary".into(),
            date: "2025-01-31".into(),
            evidence: vec![],
        }
    }

    #[test]
    fn test_valid_record_converts() {
        let trend = Trend::try_from(record()).unwrap();
        assert_eq!(trend.source(), "instagram");
        assert!(trend.evidence().is_empty());
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let mut bad = record();
        bad.date = "2025-02-30".into();
        let err = Trend::try_from(bad).unwrap_err();
        assert!(err.message.contains("2025-02-30"));

        let mut bad = record();
        bad.date = "yesterday".into();
        assert!(Trend::try_from(bad).is_err());
    }

    #[test]
    fn test_empty_theme_is_rejected() {
        let mut bad = record();
        bad.theme.clear();
        assert!(Trend::try_from(bad).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"source":"x","title":"t","snippet":"s","theme":"T","summary":"u","date":"not a date"}"#;
        assert!(serde_json::from_str::<Trend>(json).is_err());

        let json = r#"{"source":"x","title":"t","snippet":"s","theme":"T","summary":"u","date":"2024-12-01"}"#;
        let trend: Trend = serde_json::from_str(json).unwrap();
        assert_eq!(trend.date().to_string(), "2024-12-01");
    }
}
