//! HTTP client for Instagram's public post JSON endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::normalize::{normalize_post, ScrapedPost};
use crate::types::PostResponse;

/// HTTP client for Instagram's public post JSON endpoint.
///
/// Handles not-found (404) and other non-2xx responses as typed errors.
/// There is no retry policy: the pipeline throttles with a fixed pause
/// between calls and drops an item on failure rather than retrying it.
pub struct InstagramClient {
    client: Client,
    base_url: String,
}

impl InstagramClient {
    /// Creates an `InstagramClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the endpoint origin (production:
    /// `https://www.instagram.com`); tests point it at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches and normalizes metadata for one post URL.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidPostUrl`] — no shortcode in the URL path.
    /// - [`ScraperError::NotFound`] — HTTP 404 (deleted or private post).
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure.
    /// - [`ScraperError::Deserialize`] — response body is not the expected JSON.
    /// - [`ScraperError::EmptyResponse`] — valid JSON with an empty `items` array.
    pub async fn scrape_post(&self, post_url: &str) -> Result<ScrapedPost, ScraperError> {
        let shortcode = extract_shortcode(post_url)?;
        let url = self.post_api_url(&shortcode);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: post_url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: post_url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: PostResponse =
            serde_json::from_str(&body).map_err(|source| ScraperError::Deserialize {
                context: format!("post {shortcode}"),
                source,
            })?;

        let item = parsed
            .items
            .first()
            .ok_or_else(|| ScraperError::EmptyResponse {
                url: post_url.to_string(),
            })?;

        let post = normalize_post(item);
        tracing::debug!(
            shortcode,
            likes = post.likes,
            comments = post.comments,
            "scraped Instagram post"
        );
        Ok(post)
    }

    fn post_api_url(&self, shortcode: &str) -> String {
        format!("{}/p/{shortcode}/?__a=1&__d=dis", self.base_url)
    }
}

/// Extract the post shortcode from a post URL.
///
/// Recognizes the `/p/`, `/reel/`, and `/tv/` path forms.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidPostUrl`] when no shortcode segment is found.
fn extract_shortcode(post_url: &str) -> Result<String, ScraperError> {
    let path = post_url
        .split_once("//")
        .map_or(post_url, |(_, rest)| rest);

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if matches!(segment, "p" | "reel" | "tv") {
            if let Some(code) = segments.next() {
                let code = code.split(&['?', '#'][..]).next().unwrap_or(code);
                if !code.is_empty() {
                    return Ok(code.to_string());
                }
            }
            break;
        }
    }

    Err(ScraperError::InvalidPostUrl {
        url: post_url.to_string(),
        reason: "no /p/, /reel/, or /tv/ shortcode segment".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_shortcode_from_p_path() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/p/CxYzAb1/").expect("shortcode"),
            "CxYzAb1"
        );
    }

    #[test]
    fn extracts_shortcode_from_reel_path() {
        assert_eq!(
            extract_shortcode("https://instagram.com/reel/Rr123/").expect("shortcode"),
            "Rr123"
        );
    }

    #[test]
    fn extracts_shortcode_without_trailing_slash() {
        assert_eq!(
            extract_shortcode("https://instagram.com/p/abc").expect("shortcode"),
            "abc"
        );
    }

    #[test]
    fn strips_query_from_shortcode_segment() {
        assert_eq!(
            extract_shortcode("https://instagram.com/p/abc?igshid=1").expect("shortcode"),
            "abc"
        );
    }

    #[test]
    fn rejects_profile_url() {
        let err = extract_shortcode("https://instagram.com/some_user/").unwrap_err();
        assert!(
            matches!(err, ScraperError::InvalidPostUrl { .. }),
            "expected InvalidPostUrl, got: {err:?}"
        );
    }

    #[test]
    fn rejects_bare_p_segment() {
        let err = extract_shortcode("https://instagram.com/p/").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidPostUrl { .. }));
    }

    #[test]
    fn post_api_url_joins_base_and_shortcode() {
        let client =
            InstagramClient::new("http://127.0.0.1:9/", 5, "viralscope-test/0.1").expect("client");
        assert_eq!(
            client.post_api_url("abc"),
            "http://127.0.0.1:9/p/abc/?__a=1&__d=dis"
        );
    }
}
