//! Prompt inspection command handler.

use super::load_config;
use std::path::Path;
use stratagem::{PromptRegistry, StratagemResult};

/// Prints every registered prompt id, its template path and whether it loads.
pub fn list_prompts(config: Option<&Path>) -> StratagemResult<()> {
    let config = load_config(config)?;
    let registry = PromptRegistry::new(config.prompts().directory());

    println!("Prompt directory: {}", registry.directory().display());
    for id in registry.ids() {
        let path = registry.path(id)?;
        let status = match registry.template(id) {
            Ok(template) => format!("ok ({} bytes)", template.len()),
            Err(e) => format!("missing: {}", e),
        };
        println!("  {:<18} {:<40} {}", id, path.display(), status);
    }
    Ok(())
}
