//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stratagem - strategic recommendation decks from a brief and market trends
#[derive(Parser, Debug)]
#[command(name = "stratagem")]
#[command(about = "Strategic recommendation decks from a brief and market trends", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a deck and write its slides
    Generate(GenerateArgs),

    /// List prompt templates and whether they can be read
    Prompts {
        /// Configuration file (defaults to the layered configuration)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Arguments of `stratagem generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Brief JSON file
    #[arg(long)]
    pub brief: PathBuf,

    /// Trends JSON file (an array)
    #[arg(long)]
    pub trends: PathBuf,

    /// Configuration file (defaults to the layered configuration)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write the assembled deck as JSON
    #[arg(long)]
    pub deck: Option<PathBuf>,

    /// Slide output file
    #[arg(long)]
    pub slides: PathBuf,

    /// Slide output format
    #[arg(long, value_enum, default_value_t = SlideFormat::Json)]
    pub format: SlideFormat,
}

/// Slide file formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideFormat {
    /// Slide descriptors as JSON
    Json,
    /// Markdown preview
    Markdown,
}
