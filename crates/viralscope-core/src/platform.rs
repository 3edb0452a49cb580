//! Platform classification for social-media URLs.

use serde::{Deserialize, Serialize};

/// A recognized social-media platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Facebook,
    Twitter,
    Tiktok,
    Linkedin,
}

/// Ordered domain fragments checked against a lowercased URL. First match wins.
const PLATFORM_DOMAINS: &[(&str, Platform)] = &[
    ("instagram.com", Platform::Instagram),
    ("youtube.com", Platform::Youtube),
    ("youtu.be", Platform::Youtube),
    ("facebook.com", Platform::Facebook),
    ("fb.com", Platform::Facebook),
    ("twitter.com", Platform::Twitter),
    ("x.com", Platform::Twitter),
    ("tiktok.com", Platform::Tiktok),
    ("linkedin.com", Platform::Linkedin),
];

impl Platform {
    /// Classify a URL by case-insensitive substring match against the fixed
    /// domain list. Returns `None` for unrecognized URLs.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let lower = url.to_lowercase();
        PLATFORM_DOMAINS
            .iter()
            .find(|(fragment, _)| lower.contains(fragment))
            .map(|&(_, platform)| platform)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Youtube => write!(f, "youtube"),
            Platform::Facebook => write!(f, "facebook"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::Tiktok => write!(f, "tiktok"),
            Platform::Linkedin => write!(f, "linkedin"),
        }
    }
}

/// Analysis bucket a candidate's enriched record lands in.
///
/// The derived `Ord` follows declaration order, which is the fixed bucket
/// order used everywhere a "first encountered" tie-break applies. Platforms
/// without a dedicated bucket (currently `linkedin`) route to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Instagram,
    Youtube,
    Facebook,
    Twitter,
    Tiktok,
    Other,
}

impl Bucket {
    /// All buckets in fixed order.
    pub const ALL: [Bucket; 6] = [
        Bucket::Instagram,
        Bucket::Youtube,
        Bucket::Facebook,
        Bucket::Twitter,
        Bucket::Tiktok,
        Bucket::Other,
    ];

    /// Capitalized name for human-readable output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Bucket::Instagram => "Instagram",
            Bucket::Youtube => "Youtube",
            Bucket::Facebook => "Facebook",
            Bucket::Twitter => "Twitter",
            Bucket::Tiktok => "Tiktok",
            Bucket::Other => "Other",
        }
    }
}

impl From<Platform> for Bucket {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Instagram => Bucket::Instagram,
            Platform::Youtube => Bucket::Youtube,
            Platform::Facebook => Bucket::Facebook,
            Platform::Twitter => Bucket::Twitter,
            Platform::Tiktok => Bucket::Tiktok,
            Platform::Linkedin => Bucket::Other,
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Instagram => write!(f, "instagram"),
            Bucket::Youtube => write!(f, "youtube"),
            Bucket::Facebook => write!(f, "facebook"),
            Bucket::Twitter => write!(f, "twitter"),
            Bucket::Tiktok => write!(f, "tiktok"),
            Bucket::Other => write!(f, "other"),
        }
    }
}
