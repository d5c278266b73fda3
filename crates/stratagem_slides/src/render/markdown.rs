//! Markdown preview of a slide sequence.

use super::write_output;
use std::path::Path;
use stratagem_core::{LayoutId, SlideDescriptor};
use stratagem_error::StratagemResult;
use stratagem_interface::SlideRenderer;
use tracing::{info, instrument};

/// Writes one `## {title}` section per slide.
///
/// Bulleted layouts render each paragraph as a `- ` list item; text layouts
/// separate paragraphs with blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSlideRenderer;

impl MarkdownSlideRenderer {
    /// Markdown text for `slides`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem_core::{LayoutId, SlideDescriptor};
    /// use stratagem_slides::MarkdownSlideRenderer;
    ///
    /// let slides = vec![SlideDescriptor::new(
    ///     LayoutId::TitleAndBullets,
    ///     "5. Timeline",
    ///     vec!["2025-03-01: Kick-off".to_string()],
    /// )];
    /// let markdown = MarkdownSlideRenderer.to_markdown(&slides);
    /// assert_eq!(markdown, "## 5. Timeline\n\n- 2025-03-01: Kick-off\n");
    /// ```
    pub fn to_markdown(&self, slides: &[SlideDescriptor]) -> String {
        slides
            .iter()
            .map(|slide| {
                let mut section = format!("## {}\n", slide.title);
                if !slide.body_paragraphs.is_empty() {
                    section.push('\n');
                    let body = match slide.layout {
                        LayoutId::TitleAndBullets => slide
                            .body_paragraphs
                            .iter()
                            .map(|item| format!("- {}\n", item))
                            .collect::<String>(),
                        LayoutId::TitleAndText | LayoutId::Title => slide
                            .body_paragraphs
                            .iter()
                            .map(|paragraph| format!("{}\n", paragraph))
                            .collect::<Vec<_>>()
                            .join("\n"),
                    };
                    section.push_str(&body);
                }
                section
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SlideRenderer for MarkdownSlideRenderer {
    #[instrument(skip_all, fields(slides = slides.len(), path = %output_path.display()))]
    fn render(&self, slides: &[SlideDescriptor], output_path: &Path) -> StratagemResult<()> {
        write_output(output_path, &self.to_markdown(slides))?;
        info!("Wrote Markdown slides");
        Ok(())
    }
}
