//! Normalization from raw endpoint items to [`ScrapedPost`].

use chrono::{TimeZone, Utc};
use regex::Regex;

use crate::types::MediaItem;

/// Normalized metadata for one scraped post. Every field carries a concrete
/// default so downstream scoring never probes for presence.
#[derive(Debug, Clone)]
pub struct ScrapedPost {
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    /// ISO-8601 publish time; `None` when the endpoint omits `taken_at`.
    pub timestamp: Option<String>,
    pub owner: Option<ScrapedOwner>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub is_video: bool,
}

/// The posting account, as far as the endpoint exposes it.
#[derive(Debug, Clone)]
pub struct ScrapedOwner {
    pub username: String,
    pub followers: u64,
}

/// Normalize a raw media item into a [`ScrapedPost`].
///
/// Hashtags and mentions are extracted from the caption text; `media_type`
/// 2 maps to `is_video`; `taken_at` becomes an ISO-8601 UTC timestamp.
#[must_use]
pub fn normalize_post(item: &MediaItem) -> ScrapedPost {
    let caption = item
        .caption
        .as_ref()
        .and_then(|c| c.text.clone())
        .unwrap_or_default();

    let timestamp = item
        .taken_at
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .map(|dt| dt.to_rfc3339());

    let owner = item.user.as_ref().map(|user| ScrapedOwner {
        username: user.username.clone().unwrap_or_default(),
        followers: user.follower_count.unwrap_or(0),
    });

    ScrapedPost {
        hashtags: extract_tags(&caption, '#'),
        mentions: extract_tags(&caption, '@'),
        likes: item.like_count.unwrap_or(0),
        comments: item.comment_count.unwrap_or(0),
        is_video: item.media_type == Some(2),
        caption,
        timestamp,
        owner,
    }
}

/// Extract `#hashtag` or `@mention` tokens from caption text, without the
/// sigil, preserving first-appearance order and dropping duplicates.
fn extract_tags(caption: &str, sigil: char) -> Vec<String> {
    let re = Regex::new(&format!(r"{sigil}(\w+)")).expect("valid tag regex");
    let mut tags: Vec<String> = Vec::new();
    for capture in re.captures_iter(caption) {
        let tag = capture[1].to_string();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MediaCaption, MediaOwner};

    fn item_with_caption(text: &str) -> MediaItem {
        MediaItem {
            code: Some("abc".to_string()),
            taken_at: Some(1_700_000_000),
            media_type: Some(1),
            like_count: Some(10),
            comment_count: Some(2),
            caption: Some(MediaCaption {
                text: Some(text.to_string()),
            }),
            user: None,
        }
    }

    #[test]
    fn extracts_hashtags_and_mentions() {
        let post = normalize_post(&item_with_caption("launch day #viral #launch with @ana @bob"));
        assert_eq!(post.hashtags, vec!["viral", "launch"]);
        assert_eq!(post.mentions, vec!["ana", "bob"]);
    }

    #[test]
    fn deduplicates_repeated_tags() {
        let post = normalize_post(&item_with_caption("#fit #fit #gym"));
        assert_eq!(post.hashtags, vec!["fit", "gym"]);
    }

    #[test]
    fn missing_caption_yields_empty_defaults() {
        let item = MediaItem {
            code: None,
            taken_at: None,
            media_type: None,
            like_count: None,
            comment_count: None,
            caption: None,
            user: None,
        };
        let post = normalize_post(&item);
        assert_eq!(post.caption, "");
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert!(post.timestamp.is_none());
        assert!(post.owner.is_none());
        assert!(post.hashtags.is_empty());
        assert!(!post.is_video);
    }

    #[test]
    fn media_type_two_is_video() {
        let mut item = item_with_caption("clip");
        item.media_type = Some(2);
        assert!(normalize_post(&item).is_video);
    }

    #[test]
    fn taken_at_becomes_rfc3339() {
        let post = normalize_post(&item_with_caption("x"));
        let ts = post.timestamp.expect("expected timestamp");
        assert!(ts.starts_with("2023-11-14T"), "unexpected timestamp: {ts}");
    }

    #[test]
    fn owner_defaults_followers_to_zero() {
        let mut item = item_with_caption("x");
        item.user = Some(MediaOwner {
            username: Some("ana".to_string()),
            follower_count: None,
        });
        let owner = normalize_post(&item).owner.expect("expected owner");
        assert_eq!(owner.username, "ana");
        assert_eq!(owner.followers, 0);
    }
}
