//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the stratagem binary.

mod commands;
mod generate;
mod prompts;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use prompts::list_prompts;

use std::path::Path;
use stratagem::{StratagemConfig, StratagemResult};

/// Configuration from `path`, or the layered defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> StratagemResult<StratagemConfig> {
    match path {
        Some(path) => StratagemConfig::from_file(path),
        None => StratagemConfig::load(),
    }
}
