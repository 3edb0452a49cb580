//! Instagram post endpoint response types.
//!
//! ## Observed shape
//!
//! The post JSON endpoint (`/p/<shortcode>/?__a=1&__d=dis`) wraps the post in
//! an `items` array, one element per media item. Counts may be absent for
//! restricted or very fresh posts, and the caption is `null` for caption-less
//! media, so every field is modeled optional with `#[serde(default)]` and
//! resolved to a concrete default during normalization.
//!
//! `media_type` is `1` for photos, `2` for videos, `8` for carousels; only
//! "is it a video" matters downstream. `taken_at` is a unix timestamp in
//! seconds.

use serde::Deserialize;

/// Top-level response from the post JSON endpoint.
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

/// A single media item from the post endpoint.
#[derive(Debug, Deserialize)]
pub struct MediaItem {
    /// Post shortcode (e.g., `"CxYzAb1"`). May be absent.
    #[serde(default)]
    pub code: Option<String>,

    /// Unix timestamp (seconds) the post was published.
    #[serde(default)]
    pub taken_at: Option<i64>,

    /// 1 = photo, 2 = video, 8 = carousel.
    #[serde(default)]
    pub media_type: Option<i32>,

    #[serde(default)]
    pub like_count: Option<u64>,

    #[serde(default)]
    pub comment_count: Option<u64>,

    /// Caption object; `null` when the post has no caption.
    #[serde(default)]
    pub caption: Option<MediaCaption>,

    /// Posting account. `follower_count` is only present on some responses.
    #[serde(default)]
    pub user: Option<MediaOwner>,
}

#[derive(Debug, Deserialize)]
pub struct MediaCaption {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaOwner {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub follower_count: Option<u64>,
}
