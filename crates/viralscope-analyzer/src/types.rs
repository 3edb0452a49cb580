//! Pipeline result types. All of them serialize into the persisted artifact
//! and deserialize back unchanged.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use viralscope_core::{Bucket, Platform};

/// Raw pipeline input: source name mapped to a JSON value that should be an
/// array of loosely-typed result records. Non-array values and malformed
/// records are skipped, not rejected.
pub type SearchResults = serde_json::Map<String, serde_json::Value>;

/// A search result pre-screened as potentially viral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub platform: Platform,
    /// Source key the result arrived under (search engine name).
    pub source: String,
    pub title: String,
    pub description: String,
    /// Heuristic keyword/magnitude score in [0, 100].
    pub initial_score: f64,
}

/// How a candidate's analysis record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Full enrichment through the external scraper.
    FullScrape,
    /// Pass-through of the candidate's own fields and initial score.
    BasicFallback,
}

/// Per-item enriched record. Fields the producing path does not populate
/// keep their defaults (0 / empty / `None`); scoring never probes for
/// presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAnalysis {
    pub url: String,
    pub platform: Bucket,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub views: u64,
    /// Post publish time as reported by the scraper.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub is_video: bool,
    /// (likes + comments) / followers * 100; 0 when followers are unknown.
    #[serde(default)]
    pub engagement_rate: f64,
    /// Bounded composite score in [0, 100].
    pub viral_score: f64,
    pub analysis_method: AnalysisMethod,
    pub analysis_timestamp: DateTime<Utc>,
}

/// Engagement sums across all analyzed items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementTotals {
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    pub total_views: u64,
}

/// Aggregate metrics over the full platform-analysis map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViralMetrics {
    pub total_content_analyzed: usize,
    /// Items with `viral_score >= 50`.
    pub viral_content_count: usize,
    /// Arithmetic mean of all viral scores; 0 when nothing was analyzed.
    pub average_viral_score: f64,
    /// Item count per non-empty bucket.
    pub platform_distribution: BTreeMap<Bucket, usize>,
    pub engagement_totals: EngagementTotals,
}

/// One hashtag and the number of Instagram analyses it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCount {
    pub tag: String,
    pub count: usize,
}

/// Hashtag frequency summary, built from Instagram analyses only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagInsights {
    /// Top 10 hashtags by descending count; first-encountered order on ties.
    pub top_hashtags: Vec<HashtagCount>,
    pub total_unique_hashtags: usize,
}

/// Qualitative engagement insights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementInsights {
    /// Bucket with the highest mean viral score; earlier bucket wins ties.
    pub best_performing_platform: Option<Bucket>,
    /// Mean of (likes + comments + shares) per non-empty bucket.
    pub average_engagement_by_platform: BTreeMap<Bucket, f64>,
    pub hashtag_insights: HashtagInsights,
}

/// Full result of one analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: String,
    pub analysis_started: DateTime<Utc>,
    #[serde(default)]
    pub analysis_completed: Option<DateTime<Utc>>,
    /// Every candidate identified, including ones dropped during enrichment.
    pub viral_content_identified: Vec<Candidate>,
    /// Enriched records grouped by bucket. All six buckets always present.
    pub platform_analysis: BTreeMap<Bucket, Vec<PlatformAnalysis>>,
    pub viral_metrics: ViralMetrics,
    /// All analyses sorted descending by viral score, truncated to top N.
    pub top_performers: Vec<PlatformAnalysis>,
    pub engagement_insights: EngagementInsights,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Fresh result skeleton for a session: started now, empty buckets,
    /// default metrics, not yet successful.
    #[must_use]
    pub fn new(session_id: &str) -> Self {
        AnalysisResult {
            session_id: session_id.to_string(),
            analysis_started: Utc::now(),
            analysis_completed: None,
            viral_content_identified: Vec::new(),
            platform_analysis: empty_bucket_map(),
            viral_metrics: ViralMetrics::default(),
            top_performers: Vec::new(),
            engagement_insights: EngagementInsights::default(),
            success: false,
            error: None,
        }
    }
}

/// A platform-analysis map with all six buckets present and empty.
#[must_use]
pub fn empty_bucket_map() -> BTreeMap<Bucket, Vec<PlatformAnalysis>> {
    Bucket::ALL.iter().map(|&b| (b, Vec::new())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_has_all_buckets_empty() {
        let result = AnalysisResult::new("s1");
        assert_eq!(result.platform_analysis.len(), 6);
        assert!(result.platform_analysis.values().all(Vec::is_empty));
        assert!(!result.success);
    }

    #[test]
    fn analysis_method_serializes_snake_case() {
        let json = serde_json::to_string(&AnalysisMethod::BasicFallback).expect("serialize");
        assert_eq!(json, "\"basic_fallback\"");
        let json = serde_json::to_string(&AnalysisMethod::FullScrape).expect("serialize");
        assert_eq!(json, "\"full_scrape\"");
    }

    #[test]
    fn bucket_map_round_trips_through_json() {
        let mut map = empty_bucket_map();
        map.get_mut(&Bucket::Instagram)
            .expect("instagram bucket")
            .push(PlatformAnalysis {
                url: "https://instagram.com/p/a".to_string(),
                platform: Bucket::Instagram,
                title: "t".to_string(),
                description: None,
                caption: Some("c".to_string()),
                likes: 1,
                comments: 2,
                shares: 0,
                views: 0,
                timestamp: None,
                owner: Some("ana".to_string()),
                hashtags: vec!["x".to_string()],
                mentions: Vec::new(),
                is_video: false,
                engagement_rate: 1.5,
                viral_score: 42.0,
                analysis_method: AnalysisMethod::FullScrape,
                analysis_timestamp: Utc::now(),
            });

        let json = serde_json::to_string(&map).expect("serialize map");
        let parsed: BTreeMap<Bucket, Vec<PlatformAnalysis>> =
            serde_json::from_str(&json).expect("parse map");
        assert_eq!(parsed, map);
    }
}
