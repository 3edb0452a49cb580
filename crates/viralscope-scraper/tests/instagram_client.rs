//! Integration tests for `InstagramClient::scrape_post`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path, sparse responses, and
//! every error variant `scrape_post` can return.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use viralscope_scraper::{InstagramClient, ScraperError};

/// Builds an `InstagramClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client(base_url: &str) -> InstagramClient {
    InstagramClient::new(base_url, 5, "viralscope-test/0.1")
        .expect("failed to build test InstagramClient")
}

/// A fully populated single-item post fixture.
fn full_post_json() -> serde_json::Value {
    json!({
        "items": [{
            "code": "CxYzAb1",
            "taken_at": 1_700_000_000,
            "media_type": 2,
            "like_count": 2000,
            "comment_count": 100,
            "caption": {
                "text": "launch day #viral #launch #growth #brand #reels with @ana @bob"
            },
            "user": {
                "username": "brand_account",
                "follower_count": 42_000
            }
        }]
    })
}

#[tokio::test]
async fn scrape_post_maps_full_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/CxYzAb1/"))
        .and(query_param("__a", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&full_post_json()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let post = client
        .scrape_post("https://www.instagram.com/p/CxYzAb1/")
        .await
        .expect("expected Ok");

    assert_eq!(post.likes, 2000);
    assert_eq!(post.comments, 100);
    assert!(post.is_video);
    assert_eq!(
        post.hashtags,
        vec!["viral", "launch", "growth", "brand", "reels"]
    );
    assert_eq!(post.mentions, vec!["ana", "bob"]);
    let owner = post.owner.expect("expected owner");
    assert_eq!(owner.username, "brand_account");
    assert_eq!(owner.followers, 42_000);
    assert!(post.timestamp.is_some());
}

#[tokio::test]
async fn scrape_post_defaults_sparse_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/sparse/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": [{}]})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let post = client
        .scrape_post("https://www.instagram.com/p/sparse/")
        .await
        .expect("expected Ok for sparse item");

    assert_eq!(post.likes, 0);
    assert_eq!(post.comments, 0);
    assert_eq!(post.caption, "");
    assert!(post.owner.is_none());
    assert!(post.hashtags.is_empty());
    assert!(post.mentions.is_empty());
    assert!(!post.is_video);
}

#[tokio::test]
async fn scrape_post_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape_post("https://www.instagram.com/p/gone/")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::NotFound { .. }),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn scrape_post_maps_server_error_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/flaky/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape_post("https://www.instagram.com/p/flaky/")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn scrape_post_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/broken/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login wall</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape_post("https://www.instagram.com/p/broken/")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn scrape_post_rejects_empty_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/empty/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .scrape_post("https://www.instagram.com/p/empty/")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::EmptyResponse { .. }),
        "expected EmptyResponse, got: {err:?}"
    );
}

#[tokio::test]
async fn scrape_post_rejects_invalid_post_url_without_request() {
    let server = MockServer::start().await;
    // No mocks mounted: an invalid URL must fail before any HTTP call.

    let client = test_client(&server.uri());
    let err = client
        .scrape_post("https://www.instagram.com/some_profile/")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::InvalidPostUrl { .. }),
        "expected InvalidPostUrl, got: {err:?}"
    );
}
