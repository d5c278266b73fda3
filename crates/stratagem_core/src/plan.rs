//! Activation plan records: ideas, milestones and budget lines.

use crate::validate::{finite, non_empty};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stratagem_error::ValidationError;

/// A creative idea with its supporting bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "IdeaRecord")]
pub struct Idea {
    /// Idea title, unique within a deck
    label: String,
    /// Supporting points
    bullets: Vec<String>,
}

impl Idea {
    /// Creates a validated idea.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the label is empty.
    #[track_caller]
    pub fn new(label: impl Into<String>, bullets: Vec<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        non_empty("Idea label", &label)?;
        Ok(Self { label, bullets })
    }
}

#[derive(Deserialize)]
struct IdeaRecord {
    label: String,
    #[serde(default)]
    bullets: Vec<String>,
}

impl TryFrom<IdeaRecord> for Idea {
    type Error = ValidationError;

    fn try_from(record: IdeaRecord) -> Result<Self, Self::Error> {
        Idea::new(record.label, record.bullets)
    }
}

/// A dated step of the activation timeline.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stratagem_core::Milestone;
///
/// let deadline = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let kickoff = Milestone::new("Kick-off", deadline).unwrap();
/// assert_eq!(kickoff.deadline().to_string(), "2025-03-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "MilestoneRecord")]
pub struct Milestone {
    /// What happens
    label: String,
    /// When it is due
    deadline: NaiveDate,
}

impl Milestone {
    /// Creates a validated milestone.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the label is empty.
    #[track_caller]
    pub fn new(label: impl Into<String>, deadline: NaiveDate) -> Result<Self, ValidationError> {
        let label = label.into();
        non_empty("Milestone label", &label)?;
        Ok(Self { label, deadline })
    }
}

#[derive(Deserialize)]
struct MilestoneRecord {
    label: String,
    deadline: NaiveDate,
}

impl TryFrom<MilestoneRecord> for Milestone {
    type Error = ValidationError;

    fn try_from(record: MilestoneRecord) -> Result<Self, Self::Error> {
        Milestone::new(record.label, record.deadline)
    }
}

/// One line of the campaign budget.
///
/// # Examples
///
/// ```
/// use stratagem_core::BudgetItem;
///
/// let item = BudgetItem::new("Production", 10000.0, "tournage").unwrap();
/// assert_eq!(*item.estimate(), 10000.0);
///
/// assert!(BudgetItem::new("Production", -1.0, "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "BudgetItemRecord")]
pub struct BudgetItem {
    /// Spending category
    category: String,
    /// Non-negative amount, currency-less
    estimate: f64,
    /// Free-form note
    comment: String,
}

impl BudgetItem {
    /// Creates a validated budget line.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the category is empty or the estimate is
    /// negative or not finite.
    #[track_caller]
    pub fn new(
        category: impl Into<String>,
        estimate: f64,
        comment: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let category = category.into();
        non_empty("Budget category", &category)?;
        finite("Budget estimate", estimate)?;
        if estimate < 0.0 {
            return Err(ValidationError::new(format!(
                "Budget estimate for '{}' cannot be negative: {}",
                category, estimate
            )));
        }
        Ok(Self {
            category,
            estimate,
            comment: comment.into(),
        })
    }
}

#[derive(Deserialize)]
struct BudgetItemRecord {
    category: String,
    estimate: f64,
    #[serde(default)]
    comment: String,
}

impl TryFrom<BudgetItemRecord> for BudgetItem {
    type Error = ValidationError;

    fn try_from(record: BudgetItemRecord) -> Result<Self, Self::Error> {
        BudgetItem::new(record.category, record.estimate, record.comment)
    }
}
