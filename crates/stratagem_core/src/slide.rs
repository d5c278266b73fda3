//! Layout-agnostic slide descriptors.

use serde::{Deserialize, Serialize};

/// Slide layouts a rendering back-end must provide.
///
/// The identifiers are part of the slide descriptor format: `title`,
/// `title+bullets` and `title+text`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum LayoutId {
    /// Title only
    #[serde(rename = "title")]
    #[strum(serialize = "title")]
    Title,
    /// Title over a bulleted list
    #[serde(rename = "title+bullets")]
    #[strum(serialize = "title+bullets")]
    TitleAndBullets,
    /// Title over free paragraphs
    #[serde(rename = "title+text")]
    #[strum(serialize = "title+text")]
    TitleAndText,
}

/// One slide: a layout, a title and body paragraphs.
///
/// # Examples
///
/// ```
/// use stratagem_core::{LayoutId, SlideDescriptor};
///
/// let slide = SlideDescriptor::new(LayoutId::TitleAndText, "5. Timeline", vec![]);
/// assert_eq!(slide.layout.to_string(), "title+text");
/// assert!(slide.body_paragraphs.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideDescriptor {
    /// Layout from the fixed catalog
    #[serde(rename = "layout_id")]
    pub layout: LayoutId,
    /// Slide title
    pub title: String,
    /// Body paragraphs; in a bulleted layout each one is a list item
    pub body_paragraphs: Vec<String>,
}

impl SlideDescriptor {
    /// Creates a slide descriptor.
    pub fn new(layout: LayoutId, title: impl Into<String>, body_paragraphs: Vec<String>) -> Self {
        Self {
            layout,
            title: title.into(),
            body_paragraphs,
        }
    }
}
