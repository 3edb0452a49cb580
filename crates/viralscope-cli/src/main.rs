mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "viralscope")]
#[command(about = "Viral content analysis over search results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a full analysis session over a search-results JSON file.
    Analyze {
        /// Path to the search-results JSON file (object of source -> result arrays).
        input: PathBuf,
        /// Session identifier; a random UUID when omitted.
        #[arg(long)]
        session_id: Option<String>,
        /// Override the configured cap on candidates sent into enrichment.
        #[arg(long)]
        max_captures: Option<usize>,
        /// Skip the Instagram scraper even when it is enabled in the environment.
        #[arg(long)]
        no_scraper: bool,
    },
    /// Print the human-readable summary of a previously saved analysis artifact.
    Summarize {
        /// Path to a `viral_analysis_*.json` artifact.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = viralscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            session_id,
            max_captures,
            no_scraper,
        } => {
            analyze::run_analyze(
                &config,
                &input,
                session_id.as_deref(),
                max_captures,
                no_scraper,
            )
            .await
        }
        Commands::Summarize { file } => analyze::run_summarize(&file),
    }
}
