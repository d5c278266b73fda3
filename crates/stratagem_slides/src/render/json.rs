//! JSON slide file.

use super::write_output;
use std::path::Path;
use stratagem_core::SlideDescriptor;
use stratagem_error::{RenderError, StratagemResult};
use stratagem_interface::SlideRenderer;
use tracing::{info, instrument};

/// Writes the descriptor sequence as a pretty-printed JSON array.
///
/// Each element is `{"layout_id", "title", "body_paragraphs"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSlideRenderer;

impl SlideRenderer for JsonSlideRenderer {
    #[instrument(skip_all, fields(slides = slides.len(), path = %output_path.display()))]
    fn render(&self, slides: &[SlideDescriptor], output_path: &Path) -> StratagemResult<()> {
        let json = serde_json::to_string_pretty(slides)
            .map_err(|e| RenderError::new(format!("Failed to encode slides: {}", e)))?;
        write_output(output_path, &json)?;
        info!("Wrote JSON slides");
        Ok(())
    }
}
