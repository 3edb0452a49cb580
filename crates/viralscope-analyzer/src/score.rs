//! Viral score calculation from platform-specific engagement thresholds.
//!
//! Pure threshold-tier arithmetic: full threshold earns the full
//! contribution, half the threshold earns the reduced one. Sums clamp to
//! [0, 100]. Fields the enrichment path could not populate arrive as 0 and
//! simply contribute nothing.

use viralscope_core::{InstagramThresholds, YoutubeThresholds};

#[allow(clippy::cast_precision_loss)]
fn half(threshold: u64) -> f64 {
    threshold as f64 * 0.5
}

fn meets(value: u64, threshold: u64) -> bool {
    value >= threshold
}

#[allow(clippy::cast_precision_loss)]
fn meets_half(value: u64, threshold: u64) -> bool {
    value as f64 >= half(threshold)
}

/// Instagram viral score.
///
/// Likes +30/+15, comments +20/+10, engagement rate +25/+15 (thresholds
/// expressed as percentages: full = `min_engagement_rate * 100`, half =
/// `* 50`), plus capped bonuses of 2 points per hashtag (max 10) and
/// 3 points per mention (max 15).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn instagram_viral_score(
    likes: u64,
    comments: u64,
    engagement_rate: f64,
    hashtag_count: usize,
    mention_count: usize,
    thresholds: &InstagramThresholds,
) -> f64 {
    let mut score = 0.0_f64;

    if meets(likes, thresholds.min_likes) {
        score += 30.0;
    } else if meets_half(likes, thresholds.min_likes) {
        score += 15.0;
    }

    if meets(comments, thresholds.min_comments) {
        score += 20.0;
    } else if meets_half(comments, thresholds.min_comments) {
        score += 10.0;
    }

    if engagement_rate >= thresholds.min_engagement_rate * 100.0 {
        score += 25.0;
    } else if engagement_rate >= thresholds.min_engagement_rate * 50.0 {
        score += 15.0;
    }

    score += (hashtag_count as f64 * 2.0).min(10.0);
    score += (mention_count as f64 * 3.0).min(15.0);

    score.clamp(0.0, 100.0)
}

/// YouTube viral score: views +40/+20, likes +20/+10, comments +15/+8.
#[must_use]
pub fn youtube_viral_score(
    views: u64,
    likes: u64,
    comments: u64,
    thresholds: &YoutubeThresholds,
) -> f64 {
    let mut score = 0.0_f64;

    if meets(views, thresholds.min_views) {
        score += 40.0;
    } else if meets_half(views, thresholds.min_views) {
        score += 20.0;
    }

    if meets(likes, thresholds.min_likes) {
        score += 20.0;
    } else if meets_half(likes, thresholds.min_likes) {
        score += 10.0;
    }

    if meets(comments, thresholds.min_comments) {
        score += 15.0;
    } else if meets_half(comments, thresholds.min_comments) {
        score += 8.0;
    }

    score.clamp(0.0, 100.0)
}
