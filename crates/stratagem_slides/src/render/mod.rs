//! Slide renderer back-ends.

mod json;
mod markdown;

pub use json::JsonSlideRenderer;
pub use markdown::MarkdownSlideRenderer;

use std::path::Path;
use stratagem_error::RenderError;

/// Writes `contents` to `path`, creating missing parent directories.
#[track_caller]
fn write_output(path: &Path, contents: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RenderError::new(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    std::fs::write(path, contents)
        .map_err(|e| RenderError::new(format!("Failed to write {}: {}", path.display(), e)))
}
