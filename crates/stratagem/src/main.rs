//! Stratagem CLI binary.
//!
//! - Generate a recommendation deck and its slides from brief and trend files
//! - Inspect the prompt templates the configuration resolves to

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, list_prompts, run_generate};

    let cli = Cli::parse();

    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    stratagem::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }
        Commands::Prompts { config } => {
            list_prompts(config.as_deref())?;
        }
    }

    Ok(())
}
