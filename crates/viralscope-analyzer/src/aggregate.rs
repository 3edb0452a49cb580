//! Aggregation of per-item analyses into metrics, rankings, and insights.

use std::collections::BTreeMap;

use viralscope_core::Bucket;

use crate::types::{
    EngagementInsights, HashtagCount, HashtagInsights, PlatformAnalysis, ViralMetrics,
};

/// Score at or above which an item counts as viral.
const VIRAL_SCORE_THRESHOLD: f64 = 50.0;

/// Compute the aggregate metrics over the full platform-analysis map.
///
/// Empty input yields all-zero metrics, never an error. Only non-empty
/// buckets appear in `platform_distribution`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn calculate_viral_metrics(
    analyses: &BTreeMap<Bucket, Vec<PlatformAnalysis>>,
) -> ViralMetrics {
    let mut metrics = ViralMetrics::default();
    let mut score_sum = 0.0_f64;

    for (&bucket, items) in analyses {
        if items.is_empty() {
            continue;
        }
        metrics.platform_distribution.insert(bucket, items.len());

        for item in items {
            metrics.total_content_analyzed += 1;
            score_sum += item.viral_score;
            if item.viral_score >= VIRAL_SCORE_THRESHOLD {
                metrics.viral_content_count += 1;
            }
            metrics.engagement_totals.total_likes += item.likes;
            metrics.engagement_totals.total_comments += item.comments;
            metrics.engagement_totals.total_shares += item.shares;
            metrics.engagement_totals.total_views += item.views;
        }
    }

    if metrics.total_content_analyzed > 0 {
        metrics.average_viral_score = score_sum / metrics.total_content_analyzed as f64;
    }

    metrics
}

/// All analyses sorted descending by viral score, stable for ties,
/// truncated to `top_n`.
#[must_use]
pub fn top_performers(
    analyses: &BTreeMap<Bucket, Vec<PlatformAnalysis>>,
    top_n: usize,
) -> Vec<PlatformAnalysis> {
    let mut all: Vec<PlatformAnalysis> = analyses.values().flatten().cloned().collect();
    all.sort_by(|a, b| b.viral_score.total_cmp(&a.viral_score));
    all.truncate(top_n);
    all
}

/// Qualitative insights: best platform by mean score, mean engagement per
/// platform, and hashtag frequencies from Instagram analyses.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn engagement_insights(
    analyses: &BTreeMap<Bucket, Vec<PlatformAnalysis>>,
) -> EngagementInsights {
    let mut insights = EngagementInsights::default();
    let mut best: Option<(Bucket, f64)> = None;

    for (&bucket, items) in analyses {
        if items.is_empty() {
            continue;
        }
        let count = items.len() as f64;

        let mean_score: f64 = items.iter().map(|i| i.viral_score).sum::<f64>() / count;
        // Strictly greater keeps the earlier bucket on ties.
        if best.is_none_or(|(_, best_score)| mean_score > best_score) {
            best = Some((bucket, mean_score));
        }

        let total_engagement: u64 = items
            .iter()
            .map(|i| i.likes + i.comments + i.shares)
            .sum();
        insights
            .average_engagement_by_platform
            .insert(bucket, total_engagement as f64 / count);
    }

    insights.best_performing_platform = best.map(|(bucket, _)| bucket);
    insights.hashtag_insights = hashtag_insights(
        analyses
            .get(&Bucket::Instagram)
            .map_or(&[][..], Vec::as_slice),
    );
    insights
}

/// Frequency count of every hashtag across the Instagram analyses, reported
/// as the top 10 by descending count plus the distinct-tag total. Insertion
/// order breaks ties: a tag seen earlier outranks an equally frequent later
/// one.
fn hashtag_insights(instagram: &[PlatformAnalysis]) -> HashtagInsights {
    let mut counts: Vec<HashtagCount> = Vec::new();

    for analysis in instagram {
        for tag in &analysis.hashtags {
            if let Some(entry) = counts.iter_mut().find(|c| &c.tag == tag) {
                entry.count += 1;
            } else {
                counts.push(HashtagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }

    let total_unique_hashtags = counts.len();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(10);

    HashtagInsights {
        top_hashtags: counts,
        total_unique_hashtags,
    }
}
