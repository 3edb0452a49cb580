//! Human-readable digest of a completed analysis.

use std::fmt::Write as _;

use crate::types::AnalysisResult;

/// Render the fixed multi-line text summary of an analysis result.
///
/// A failed result produces a fixed failure message instead of the digest.
#[must_use]
pub fn summarize(result: &AnalysisResult) -> String {
    if !result.success {
        return "viral analysis failed".to_string();
    }

    let metrics = &result.viral_metrics;
    let insights = &result.engagement_insights;
    let best_platform = insights
        .best_performing_platform
        .map_or("n/a", |bucket| bucket.display_name());

    let mut summary = format!(
        "VIRAL CONTENT ANALYSIS - SUMMARY\n\
         \n\
         Overall statistics:\n\
         - Content analyzed: {}\n\
         - Viral content identified: {}\n\
         - Average viral score: {:.1}/100\n\
         - Best platform: {}\n\
         \n\
         Total engagement:\n\
         - Likes: {}\n\
         - Comments: {}\n\
         - Views: {}\n\
         \n\
         Top performers:\n",
        metrics.total_content_analyzed,
        metrics.viral_content_count,
        metrics.average_viral_score,
        best_platform,
        metrics.engagement_totals.total_likes,
        metrics.engagement_totals.total_comments,
        metrics.engagement_totals.total_views,
    );

    for (rank, performer) in result.top_performers.iter().take(3).enumerate() {
        let title = truncate_title(&performer.title, 50);
        let _ = writeln!(
            summary,
            "  {}. [{}] {}... (score: {:.1})",
            rank + 1,
            performer.platform.display_name(),
            title,
            performer.viral_score,
        );
    }

    summary.trim_end().to_string()
}

/// First `max_chars` characters of a title; char-based so multi-byte text
/// never splits.
fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.is_empty() {
        return "untitled".to_string();
    }
    title.chars().take(max_chars).collect()
}
