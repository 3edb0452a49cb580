use std::path::PathBuf;

/// Application configuration resolved from environment variables.
///
/// Every field has a default; the pipeline runs with zero configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the JSON artifacts are written to. Created on first use.
    pub output_dir: PathBuf,
    /// Cap on candidates routed into enrichment per run.
    pub max_captures: usize,
    /// Length of the `top_performers` ranking.
    pub top_n: usize,
    /// Fixed pause between successive enrichment calls, in milliseconds.
    pub enrich_delay_ms: u64,
    /// When false, every candidate takes the basic fallback path.
    pub scraper_enabled: bool,
    pub scraper_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Base URL of the Instagram endpoint; overridable for tests.
    pub scraper_base_url: String,
    pub log_level: String,
    /// Optional YAML file overriding the built-in scoring tables.
    pub scoring_path: Option<PathBuf>,
}
