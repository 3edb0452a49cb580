//! Shared domain types and configuration for viralscope.
//!
//! Holds the platform classifier, the lenient search-result input record,
//! the scoring tables (keyword weights, magnitude tiers, per-platform viral
//! thresholds), and environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod platform;
pub mod scoring;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use platform::{Bucket, Platform};
pub use scoring::{
    load_scoring, InstagramThresholds, KeywordWeight, MagnitudeTier, ScoringConfig,
    YoutubeThresholds,
};
pub use types::SearchResult;
