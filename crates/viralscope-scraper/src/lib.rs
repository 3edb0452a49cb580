//! Instagram post metadata scraper.
//!
//! Fetches public post metadata from Instagram's JSON endpoint and normalizes
//! it into a [`ScrapedPost`]. This is the "enrichment capability" of the
//! viral-content pipeline; the analyzer degrades to a basic fallback when no
//! client is constructed or a scrape fails.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::InstagramClient;
pub use error::ScraperError;
pub use normalize::{normalize_post, ScrapedOwner, ScrapedPost};
pub use types::{MediaCaption, MediaItem, MediaOwner, PostResponse};
