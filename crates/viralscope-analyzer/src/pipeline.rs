//! Pipeline orchestration: the `ViralContentAnalyzer` service.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;

use viralscope_core::{load_scoring, AppConfig, ConfigError, ScoringConfig};
use viralscope_scraper::InstagramClient;

use crate::aggregate::{calculate_viral_metrics, engagement_insights, top_performers};
use crate::enrich::EnrichmentAdapter;
use crate::filter::identify_candidates;
use crate::report::save_analysis;
use crate::types::{AnalysisResult, SearchResults};

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub enrich_delay_ms: u64,
    pub scoring: ScoringConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            output_dir: PathBuf::from("viral_data"),
            top_n: 10,
            enrich_delay_ms: 1000,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Derive the pipeline configuration from the application config,
    /// loading the scoring-table override when one is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured scoring file cannot be
    /// loaded or fails validation.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let scoring = match &config.scoring_path {
            Some(path) => load_scoring(path)?,
            None => ScoringConfig::default(),
        };
        Ok(AnalyzerConfig {
            output_dir: config.output_dir.clone(),
            top_n: config.top_n,
            enrich_delay_ms: config.enrich_delay_ms,
            scoring,
        })
    }
}

/// Heuristic viral-content analyzer.
///
/// Explicitly constructed per use; holds configuration and an optional
/// scraper client, no process-wide state. One call to [`analyze`] is one
/// session: identify candidates, enrich them sequentially, aggregate, and
/// persist the artifact.
///
/// [`analyze`]: ViralContentAnalyzer::analyze
pub struct ViralContentAnalyzer {
    config: AnalyzerConfig,
    scraper: Option<InstagramClient>,
}

impl ViralContentAnalyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig, scraper: Option<InstagramClient>) -> Self {
        if scraper.is_none() {
            tracing::warn!("analyzer constructed without scraper; enrichment will be basic only");
        }
        Self { config, scraper }
    }

    /// Run the full analysis for one session.
    ///
    /// 1. Screen search results into scored candidates.
    /// 2. Enrich the first `max_captures` candidates, sequentially.
    /// 3. Aggregate metrics, rankings, and insights.
    /// 4. Persist the artifact (failure logged, non-fatal).
    ///
    /// Item-level failures never abort the run; the returned result always
    /// carries whatever was accumulated, with `success` reflecting the
    /// analysis phases only.
    pub async fn analyze(
        &self,
        search_results: &SearchResults,
        session_id: &str,
        max_captures: usize,
    ) -> AnalysisResult {
        tracing::info!(session_id, "analyzing viral content");
        let mut result = AnalysisResult::new(session_id);

        tracing::info!("phase 1: identifying viral content");
        let candidates = identify_candidates(search_results, &self.config.scoring);
        result.viral_content_identified = candidates.clone();

        tracing::info!("phase 2: detailed analysis");
        let capped = &candidates[..candidates.len().min(max_captures)];
        let adapter = EnrichmentAdapter::new(
            self.scraper.as_ref(),
            &self.config.scoring,
            Duration::from_millis(self.config.enrich_delay_ms),
        );
        result.platform_analysis = adapter.analyze_candidates(capped).await;

        tracing::info!("phase 3: metrics and insights");
        result.viral_metrics = calculate_viral_metrics(&result.platform_analysis);
        result.top_performers = top_performers(&result.platform_analysis, self.config.top_n);
        result.engagement_insights = engagement_insights(&result.platform_analysis);

        result.analysis_completed = Some(Utc::now());
        result.success = true;

        // Persistence failure is logged and swallowed; the success flag
        // reflects the analysis, not the write.
        if let Err(e) = save_analysis(&result, &self.config.output_dir).await {
            tracing::error!(error = %e, "failed to save analysis artifact");
        }

        tracing::info!(
            session_id,
            identified = result.viral_content_identified.len(),
            analyzed = result.viral_metrics.total_content_analyzed,
            "viral analysis completed"
        );
        result
    }

    /// Render the text digest for a completed result.
    #[must_use]
    pub fn summarize(&self, result: &AnalysisResult) -> String {
        crate::summary::summarize(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(scoring_path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            output_dir: PathBuf::from("/tmp/out"),
            max_captures: 15,
            top_n: 4,
            enrich_delay_ms: 250,
            scraper_enabled: true,
            scraper_timeout_secs: 30,
            scraper_user_agent: "viralscope-test/0.1".to_string(),
            scraper_base_url: "https://www.instagram.com".to_string(),
            log_level: "info".to_string(),
            scoring_path,
        }
    }

    #[test]
    fn from_app_config_without_scoring_path_uses_built_in_tables() {
        let config = AnalyzerConfig::from_app_config(&app_config(None))
            .expect("default tables should build");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.top_n, 4);
        assert_eq!(config.enrich_delay_ms, 250);
        assert_eq!(
            config.scoring.viral_keywords,
            ScoringConfig::default().viral_keywords
        );
    }

    #[test]
    fn from_app_config_loads_scoring_override_file() {
        let mut override_tables = ScoringConfig::default();
        override_tables.viral_keywords = vec!["buzz".to_string()];
        override_tables.keyword_weights.truncate(1);
        override_tables.viral_number_floor = 500;
        override_tables.instagram.min_likes = 100;
        override_tables.youtube.min_views = 1000;

        let path = std::env::temp_dir().join(format!("scoring-{}.yaml", uuid::Uuid::new_v4()));
        let yaml = serde_yaml::to_string(&override_tables).expect("serialize override");
        std::fs::write(&path, yaml).expect("write scoring override");

        let result = AnalyzerConfig::from_app_config(&app_config(Some(path.clone())));
        std::fs::remove_file(&path).ok();

        let config = result.expect("override file should load");
        assert_eq!(config.scoring.viral_keywords, vec!["buzz"]);
        assert_eq!(config.scoring.keyword_weights.len(), 1);
        assert_eq!(config.scoring.viral_number_floor, 500);
        assert_eq!(config.scoring.instagram.min_likes, 100);
        assert_eq!(config.scoring.youtube.min_views, 1000);
    }

    #[test]
    fn from_app_config_missing_scoring_file_is_error() {
        let config = app_config(Some(PathBuf::from("/nonexistent/scoring.yaml")));
        let result = AnalyzerConfig::from_app_config(&config);
        assert!(
            matches!(result, Err(ConfigError::ScoringFileIo { .. })),
            "expected ScoringFileIo, got: {result:?}"
        );
    }
}
