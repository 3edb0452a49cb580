//! Scoring tables for candidate filtering and viral score calculation.
//!
//! The keyword set, keyword weights, magnitude tiers, and per-platform
//! thresholds are ad hoc heuristic constants with no derivation behind them.
//! They are carried as configuration data: `ScoringConfig::default()` holds
//! the built-in tables, and an optional YAML file can override them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One weighted keyword. Each keyword contributes its weight at most once
/// per result, matched by containment on the lowercased title + description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: f64,
}

/// One magnitude bonus tier for embedded numbers. Tiers are kept sorted
/// descending by `above`; per number only the highest matching tier applies,
/// and bonuses accumulate across numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagnitudeTier {
    /// Exclusive lower bound: the bonus applies to numbers strictly greater.
    pub above: u64,
    pub bonus: f64,
}

/// Viral thresholds for Instagram scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramThresholds {
    pub min_likes: u64,
    pub min_comments: u64,
    /// Engagement-rate threshold as a fraction (0.03 = 3%). Compared against
    /// the percentage-valued engagement rate after a x100 scale-up.
    pub min_engagement_rate: f64,
}

/// Viral thresholds for YouTube scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeThresholds {
    pub min_views: u64,
    pub min_likes: u64,
    pub min_comments: u64,
}

/// All heuristic tables used by the filter and score calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Keywords whose presence flags a result as potentially viral.
    pub viral_keywords: Vec<String>,
    /// Weighted subset of keywords contributing to the initial score.
    pub keyword_weights: Vec<KeywordWeight>,
    /// Magnitude bonus tiers, sorted descending by `above`.
    pub magnitude_tiers: Vec<MagnitudeTier>,
    /// An embedded number strictly greater than this flags a result as
    /// potentially viral even without keywords.
    pub viral_number_floor: u64,
    pub instagram: InstagramThresholds,
    pub youtube: YoutubeThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            viral_keywords: [
                "viral",
                "trending",
                "popular",
                "milhões",
                "millions",
                "views",
                "visualizações",
                "curtidas",
                "likes",
                "shares",
                "compartilhamentos",
                "comentários",
                "comments",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            keyword_weights: [
                ("viral", 10.0),
                ("trending", 8.0),
                ("popular", 6.0),
                ("milhões", 15.0),
                ("millions", 15.0),
                ("views", 5.0),
                ("visualizações", 5.0),
                ("curtidas", 3.0),
                ("likes", 3.0),
            ]
            .iter()
            .map(|&(keyword, weight)| KeywordWeight {
                keyword: keyword.to_string(),
                weight,
            })
            .collect(),
            magnitude_tiers: vec![
                MagnitudeTier {
                    above: 1_000_000,
                    bonus: 20.0,
                },
                MagnitudeTier {
                    above: 100_000,
                    bonus: 15.0,
                },
                MagnitudeTier {
                    above: 10_000,
                    bonus: 10.0,
                },
                MagnitudeTier {
                    above: 1_000,
                    bonus: 5.0,
                },
            ],
            viral_number_floor: 1_000,
            instagram: InstagramThresholds {
                min_likes: 1_000,
                min_comments: 50,
                min_engagement_rate: 0.03,
            },
            youtube: YoutubeThresholds {
                min_views: 10_000,
                min_likes: 500,
                min_comments: 50,
            },
        }
    }
}

/// Load and validate a scoring configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_scoring(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ScoringFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let scoring: ScoringConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::ScoringFileParse)?;

    validate_scoring(&scoring)?;

    Ok(scoring)
}

fn validate_scoring(scoring: &ScoringConfig) -> Result<(), ConfigError> {
    if scoring.viral_keywords.is_empty() {
        return Err(ConfigError::Validation(
            "viral_keywords must be non-empty".to_string(),
        ));
    }

    for kw in &scoring.viral_keywords {
        if kw.trim().is_empty() {
            return Err(ConfigError::Validation(
                "viral keyword must be non-empty".to_string(),
            ));
        }
    }

    for entry in &scoring.keyword_weights {
        if entry.keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "weighted keyword must be non-empty".to_string(),
            ));
        }
        if entry.weight <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "keyword '{}' has non-positive weight {}",
                entry.keyword, entry.weight
            )));
        }
    }

    let mut prev: Option<u64> = None;
    for tier in &scoring.magnitude_tiers {
        if tier.bonus <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "magnitude tier above {} has non-positive bonus {}",
                tier.above, tier.bonus
            )));
        }
        if let Some(prev_above) = prev {
            if tier.above >= prev_above {
                return Err(ConfigError::Validation(
                    "magnitude_tiers must be sorted strictly descending by 'above'".to_string(),
                ));
            }
        }
        prev = Some(tier.above);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_pass_validation() {
        let scoring = ScoringConfig::default();
        assert!(validate_scoring(&scoring).is_ok());
    }

    #[test]
    fn default_keyword_weights_stay_in_documented_range() {
        for entry in ScoringConfig::default().keyword_weights {
            assert!(
                (3.0..=15.0).contains(&entry.weight),
                "keyword '{}' weight {} outside 3..=15",
                entry.keyword,
                entry.weight
            );
        }
    }

    #[test]
    fn default_tiers_are_descending() {
        let tiers = ScoringConfig::default().magnitude_tiers;
        for pair in tiers.windows(2) {
            assert!(pair[0].above > pair[1].above);
        }
    }

    #[test]
    fn yaml_round_trip_preserves_tables() {
        let scoring = ScoringConfig::default();
        let yaml = serde_yaml::to_string(&scoring).expect("serialize scoring");
        let parsed: ScoringConfig = serde_yaml::from_str(&yaml).expect("parse scoring");
        assert_eq!(parsed.viral_keywords, scoring.viral_keywords);
        assert_eq!(parsed.magnitude_tiers.len(), scoring.magnitude_tiers.len());
        assert_eq!(parsed.instagram.min_likes, scoring.instagram.min_likes);
        assert_eq!(parsed.youtube.min_views, scoring.youtube.min_views);
    }

    #[test]
    fn rejects_empty_keyword_list() {
        let mut scoring = ScoringConfig::default();
        scoring.viral_keywords.clear();
        let err = validate_scoring(&scoring).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_non_positive_weight() {
        let mut scoring = ScoringConfig::default();
        scoring.keyword_weights[0].weight = 0.0;
        assert!(validate_scoring(&scoring).is_err());
    }

    #[test]
    fn rejects_unsorted_tiers() {
        let mut scoring = ScoringConfig::default();
        scoring.magnitude_tiers.reverse();
        assert!(validate_scoring(&scoring).is_err());
    }

    #[test]
    fn load_scoring_missing_file_is_io_error() {
        let err = load_scoring(Path::new("/nonexistent/scoring.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ScoringFileIo { .. }));
    }
}
