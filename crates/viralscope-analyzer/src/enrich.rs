//! Enrichment adapter: turns candidates into per-platform analysis records.
//!
//! Candidates are processed strictly sequentially with a fixed pause between
//! items — a simple non-adaptive throttle, no backoff, no concurrency. A
//! failed enrichment drops that item and the batch continues; that is policy,
//! not an accident.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;

use viralscope_core::{Bucket, Platform, ScoringConfig};
use viralscope_scraper::{InstagramClient, ScrapedPost, ScraperError};

use crate::score::instagram_viral_score;
use crate::types::{empty_bucket_map, AnalysisMethod, Candidate, PlatformAnalysis};

/// Sequential per-candidate enrichment over an optional scraper.
///
/// With no scraper every candidate takes the basic fallback path regardless
/// of platform. With a scraper, Instagram candidates are fully enriched,
/// YouTube candidates get the basic record plus approximate view parsing
/// (the scraper has no YouTube support), and everything else passes through
/// as basic fallback into its bucket.
pub struct EnrichmentAdapter<'a> {
    scraper: Option<&'a InstagramClient>,
    scoring: &'a ScoringConfig,
    delay: Duration,
}

impl<'a> EnrichmentAdapter<'a> {
    pub fn new(
        scraper: Option<&'a InstagramClient>,
        scoring: &'a ScoringConfig,
        delay: Duration,
    ) -> Self {
        Self {
            scraper,
            scoring,
            delay,
        }
    }

    /// Analyze candidates in order, returning records grouped by bucket.
    /// All six buckets are present in the output, empty ones included.
    pub async fn analyze_candidates(
        &self,
        candidates: &[Candidate],
    ) -> BTreeMap<Bucket, Vec<PlatformAnalysis>> {
        let mut analyses = empty_bucket_map();

        let Some(scraper) = self.scraper else {
            tracing::warn!("scraper unavailable; using basic analysis for all candidates");
            for candidate in candidates {
                let analysis = basic_analysis(candidate);
                analyses.entry(analysis.platform).or_default().push(analysis);
            }
            return analyses;
        };

        for candidate in candidates {
            tracing::info!(
                platform = %candidate.platform,
                url = %candidate.url,
                "analyzing candidate"
            );

            match candidate.platform {
                Platform::Instagram => {
                    match self.analyze_instagram(scraper, candidate).await {
                        Ok(analysis) => {
                            tracing::info!(
                                likes = analysis.likes,
                                comments = analysis.comments,
                                "Instagram post analyzed"
                            );
                            analyses.entry(Bucket::Instagram).or_default().push(analysis);
                        }
                        Err(e) => {
                            tracing::warn!(
                                url = %candidate.url,
                                error = %e,
                                "Instagram enrichment failed; dropping candidate"
                            );
                        }
                    }
                }
                Platform::Youtube => {
                    analyses
                        .entry(Bucket::Youtube)
                        .or_default()
                        .push(analyze_youtube(candidate));
                }
                _ => {
                    let analysis = basic_analysis(candidate);
                    analyses.entry(analysis.platform).or_default().push(analysis);
                }
            }

            // Fixed pause between successive enrichment calls.
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        analyses
    }

    async fn analyze_instagram(
        &self,
        scraper: &InstagramClient,
        candidate: &Candidate,
    ) -> Result<PlatformAnalysis, ScraperError> {
        let post = scraper.scrape_post(&candidate.url).await?;
        Ok(instagram_analysis(candidate, post, self.scoring))
    }
}

/// Build the Instagram analysis record from a scraped post.
#[allow(clippy::cast_precision_loss)]
fn instagram_analysis(
    candidate: &Candidate,
    post: ScrapedPost,
    scoring: &ScoringConfig,
) -> PlatformAnalysis {
    let followers = post.owner.as_ref().map_or(0, |owner| owner.followers);
    let engagement_rate = if followers > 0 {
        (post.likes + post.comments) as f64 / followers as f64 * 100.0
    } else {
        0.0
    };

    let viral_score = instagram_viral_score(
        post.likes,
        post.comments,
        engagement_rate,
        post.hashtags.len(),
        post.mentions.len(),
        &scoring.instagram,
    );

    PlatformAnalysis {
        url: candidate.url.clone(),
        platform: Bucket::Instagram,
        title: candidate.title.clone(),
        description: None,
        caption: Some(post.caption),
        likes: post.likes,
        comments: post.comments,
        shares: 0,
        views: 0,
        timestamp: post.timestamp,
        owner: post.owner.map(|owner| owner.username),
        hashtags: post.hashtags,
        mentions: post.mentions,
        is_video: post.is_video,
        engagement_rate,
        viral_score,
        analysis_method: AnalysisMethod::FullScrape,
        analysis_timestamp: Utc::now(),
    }
}

/// YouTube gets no external enrichment; the record carries the initial score
/// plus whatever approximate view count the title/description text reveals.
fn analyze_youtube(candidate: &Candidate) -> PlatformAnalysis {
    let mut analysis = basic_analysis(candidate);
    let text = format!("{} {}", candidate.title, candidate.description).to_lowercase();
    if let Some(views) = parse_approximate_views(&text) {
        analysis.views = views;
    }
    analysis
}

/// Pass-through record for candidates without richer enrichment.
pub fn basic_analysis(candidate: &Candidate) -> PlatformAnalysis {
    PlatformAnalysis {
        url: candidate.url.clone(),
        platform: Bucket::from(candidate.platform),
        title: candidate.title.clone(),
        description: Some(candidate.description.clone()),
        caption: None,
        likes: 0,
        comments: 0,
        shares: 0,
        views: 0,
        timestamp: None,
        owner: None,
        hashtags: Vec::new(),
        mentions: Vec::new(),
        is_video: false,
        engagement_rate: 0.0,
        viral_score: candidate.initial_score,
        analysis_method: AnalysisMethod::BasicFallback,
        analysis_timestamp: Utc::now(),
    }
}

/// Parse an approximate view count like "10 million views" or "250 mil".
///
/// First match only; the matched unit text picks the multiplier
/// (million/milhão → x1,000,000; mil/k/thousand → x1,000). A comma in the
/// number is treated as a decimal point. Returns `None` when nothing
/// parseable is found.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_approximate_views(text: &str) -> Option<u64> {
    let re = Regex::new(r"(\d+(?:[.,]\d+)?)\s*(million|milhão|mil|k|thousand)")
        .expect("valid view-count regex");
    let captures = re.captures(text)?;

    let number: f64 = captures[1].replace(',', ".").parse().ok()?;
    let multiplier = match &captures[2] {
        "million" | "milhão" => 1_000_000.0,
        _ => 1_000.0,
    };

    Some((number * multiplier) as u64)
}
