//! Viral-content analysis pipeline.
//!
//! Screens social-media URLs from a prior search step with keyword and
//! number heuristics, enriches Instagram candidates through the scraper,
//! converts engagement numbers into bounded 0-100 viral scores, aggregates
//! per-platform metrics and insights, and persists one JSON artifact per
//! session. Enrichment is strictly sequential with a fixed pause between
//! items; an item failure drops that item and the batch continues.

pub mod aggregate;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod score;
pub mod summary;
pub mod types;

pub use error::AnalyzerError;
pub use pipeline::{AnalyzerConfig, ViralContentAnalyzer};
pub use summary::summarize;
pub use types::{
    AnalysisMethod, AnalysisResult, Candidate, EngagementInsights, EngagementTotals,
    HashtagCount, HashtagInsights, PlatformAnalysis, SearchResults, ViralMetrics,
};
