//! Command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! Per-item enrichment failures are handled inside the pipeline; the
//! handlers here only fail on unusable input or configuration.

use std::path::Path;

use viralscope_analyzer::{summarize, AnalysisResult, AnalyzerConfig, SearchResults};
use viralscope_core::AppConfig;
use viralscope_scraper::InstagramClient;

/// Run a full analysis session over the search-results file at `input`.
///
/// # Errors
///
/// Returns an error if the input file cannot be read, is not a JSON object,
/// or the analyzer config (including an optional scoring file) cannot be
/// built. A disabled or failing scraper is not an error; the pipeline falls
/// back to basic analysis.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    input: &Path,
    session_id: Option<&str>,
    max_captures: Option<usize>,
    no_scraper: bool,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not valid JSON: {e}", input.display()))?;
    let search_results: SearchResults = match value {
        serde_json::Value::Object(map) => map,
        other => anyhow::bail!(
            "{} must contain a JSON object of source -> result arrays, got {other}",
            input.display()
        ),
    };

    let analyzer_config = AnalyzerConfig::from_app_config(config)?;

    let scraper = if no_scraper || !config.scraper_enabled {
        None
    } else {
        match InstagramClient::new(
            &config.scraper_base_url,
            config.scraper_timeout_secs,
            &config.scraper_user_agent,
        ) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build Instagram scraper, continuing without");
                None
            }
        }
    };

    let session_id = session_id
        .map(ToString::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let max_captures = max_captures.unwrap_or(config.max_captures);

    let analyzer = viralscope_analyzer::ViralContentAnalyzer::new(analyzer_config, scraper);
    let result = analyzer.analyze(&search_results, &session_id, max_captures).await;

    println!("{}", analyzer.summarize(&result));
    Ok(())
}

/// Print the summary of a previously saved analysis artifact.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as an
/// analysis artifact.
pub(crate) fn run_summarize(file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;
    let result: AnalysisResult = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not an analysis artifact: {e}", file.display()))?;

    println!("{}", summarize(&result));
    Ok(())
}
