//! Candidate filter: screens raw search results for potentially viral content
//! and assigns the initial heuristic score.

use regex::Regex;

use viralscope_core::{Platform, ScoringConfig, SearchResult};

use crate::types::{Candidate, SearchResults};

/// Screen all search results and promote the potentially viral ones.
///
/// Results are walked source by source (sources in map order). A result is
/// promoted iff its URL classifies to a known platform AND it passes the
/// keyword/number predicate. Non-array source entries and malformed records
/// are skipped silently.
pub fn identify_candidates(
    search_results: &SearchResults,
    scoring: &ScoringConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (source, entries) in search_results {
        let Some(entries) = entries.as_array() else {
            tracing::debug!(source, "skipping non-array source entry");
            continue;
        };

        for entry in entries {
            let Some(result) = SearchResult::from_value(entry) else {
                continue;
            };
            let Some(url) = result.url.clone() else {
                continue;
            };
            let Some(platform) = Platform::from_url(&url) else {
                continue;
            };

            let text = result.text_content();
            if !is_potentially_viral(&text, scoring) {
                continue;
            }

            candidates.push(Candidate {
                url,
                platform,
                source: source.clone(),
                title: result.title.unwrap_or_default(),
                description: result.description.unwrap_or_default(),
                initial_score: initial_score(&text, scoring),
            });
        }
    }

    tracing::info!(
        count = candidates.len(),
        "identified potentially viral content"
    );
    candidates
}

/// Keyword/number predicate over lowercased title + description.
fn is_potentially_viral(text: &str, scoring: &ScoringConfig) -> bool {
    let has_keyword = scoring
        .viral_keywords
        .iter()
        .any(|keyword| text.contains(keyword.as_str()));
    has_keyword || embedded_numbers(text).iter().any(|&n| n > scoring.viral_number_floor)
}

/// Initial heuristic score: keyword weights (each keyword at most once) plus
/// magnitude bonuses (per number, the highest matching tier), clamped to
/// [0, 100].
pub fn initial_score(text: &str, scoring: &ScoringConfig) -> f64 {
    let mut score = 0.0_f64;

    for entry in &scoring.keyword_weights {
        if text.contains(entry.keyword.as_str()) {
            score += entry.weight;
        }
    }

    for number in embedded_numbers(text) {
        if let Some(tier) = scoring.magnitude_tiers.iter().find(|t| number > t.above) {
            score += tier.bonus;
        }
    }

    score.clamp(0.0, 100.0)
}

/// All decimal-digit runs in the text, parsed as integers. Runs too large
/// for a `u64` are skipped.
fn embedded_numbers(text: &str) -> Vec<u64> {
    let re = Regex::new(r"\d+").expect("valid digit regex");
    re.find_iter(text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .collect()
}
