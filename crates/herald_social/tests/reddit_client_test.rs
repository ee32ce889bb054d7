//! HTTP-level tests for the Reddit client against a mock server.

use herald_core::{Credentials, ListingRequest, ListingSort, Session};
use herald_error::HeraldErrorKind;
use herald_interface::ContentPlatform;
use herald_rate_limit::RequestPacer;
use herald_social::{PublishConfirmation, RedditClient, RedditConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const USER_AGENT: &str = "herald-test/0.1";

fn client(server: &MockServer, pacer: RequestPacer) -> RedditClient {
    let config = RedditConfig::default()
        .with_base_url(server.base_url())
        .with_credentials("wordbot", "hunter2")
        .with_user_agent(USER_AGENT);
    RedditClient::new(config, pacer, Duration::from_secs(5)).expect("Valid client")
}

fn unpaced(server: &MockServer) -> RedditClient {
    client(server, RequestPacer::new(Duration::ZERO))
}

fn session() -> Session {
    Session::new("reddit_session=cookie123", "modhash456")
}

fn listing_json(names: &[&str]) -> serde_json::Value {
    let children: Vec<_> = names
        .iter()
        .map(|name| {
            json!({
                "kind": "t3",
                "data": {
                    "id": name.trim_start_matches("t3_"),
                    "name": name,
                    "title": format!("Title of {}", name),
                    "author": "someone",
                    "url": "https://example.com",
                    "permalink": format!("/r/test/comments/{}/", name),
                    "subreddit": "test",
                    "score": 42,
                    "num_comments": 7,
                    "created_utc": 1_700_000_000.0
                }
            })
        })
        .collect();
    json!({ "kind": "Listing", "data": { "children": children, "after": null, "before": null } })
}

#[tokio::test]
async fn test_login_extracts_session() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login/wordbot")
                .header("user-agent", USER_AGENT)
                .header("content-type", "application/x-www-form-urlencoded")
                .body_includes("user=wordbot")
                .body_includes("passwd=hunter2")
                .body_includes("api_type=json");
            then.status(200).json_body(json!({
                "json": { "errors": [], "data": { "cookie": "abc,def", "modhash": "mh123" } }
            }));
        })
        .await;

    let client = unpaced(&server);
    let session = client
        .login(&Credentials::new("wordbot", "hunter2"))
        .await
        .expect("Login succeeds");

    assert_eq!(session.session_token(), "reddit_session=abc,def");
    assert_eq!(session.anti_forgery_token(), "mh123");
    login.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_login_without_modhash_is_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/wordbot");
            then.status(200).json_body(json!({
                "json": { "errors": [["WRONG_PASSWORD", "wrong password", "passwd"]] }
            }));
        })
        .await;

    let err = unpaced(&server)
        .login(&Credentials::new("wordbot", "nope"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), HeraldErrorKind::Auth(_)));
    assert!(err.to_string().contains("WRONG_PASSWORD"));
}

#[tokio::test]
async fn test_login_with_unparseable_body_is_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/login/wordbot");
            then.status(200).body("<html>down for maintenance</html>");
        })
        .await;

    let err = unpaced(&server)
        .login(&Credentials::new("wordbot", "hunter2"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), HeraldErrorKind::Auth(_)));
}

#[tokio::test]
async fn test_first_poll_has_no_before_parameter() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/new.json")
                .query_param("sort", "rising")
                .query_param("limit", "1")
                .header("cookie", "reddit_session=cookie123");
            then.status(200).json_body(listing_json(&["t3_newest"]));
        })
        .await;

    let request = ListingRequest::new("new", ListingSort::Rising, "", 1);
    let page = unpaced(&server)
        .fetch_listing(&request, &session())
        .await
        .expect("Listing decodes");

    assert_eq!(page.len(), 1);
    let post = page.first().expect("One post");
    assert_eq!(post.fullname(), "t3_newest");
    assert_eq!(post.id(), "newest");
    assert_eq!(*post.score(), 42);
    assert_eq!(*post.comment_count(), 7);
    assert_eq!(*post.created_at_epoch_seconds(), 1_700_000_000);
    listing.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_listing_sends_before_cursor_and_keeps_order() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/r/rust/new.json")
                .query_param("before", "t3_seen")
                .query_param("limit", "100");
            then.status(200)
                .json_body(listing_json(&["t3_c", "t3_b", "t3_a"]));
        })
        .await;

    let request = ListingRequest::new("r/rust/new", ListingSort::New, "t3_seen", 100);
    let page = unpaced(&server)
        .fetch_listing(&request, &session())
        .await
        .expect("Listing decodes");

    let names: Vec<&str> = page.posts().iter().map(|p| p.fullname().as_str()).collect();
    assert_eq!(names, vec!["t3_c", "t3_b", "t3_a"]);
    listing.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_malformed_listing_is_decode_error_not_empty_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/new.json");
            then.status(200).json_body(json!({ "data": { "kids": [] } }));
        })
        .await;

    let request = ListingRequest::new("new", ListingSort::Rising, "", 1);
    let err = unpaced(&server)
        .fetch_listing(&request, &session())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), HeraldErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_listing_server_error_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/new.json");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let request = ListingRequest::new("new", ListingSort::Rising, "", 1);
    let err = unpaced(&server)
        .fetch_listing(&request, &session())
        .await
        .unwrap_err();

    match err.kind() {
        HeraldErrorKind::Transport(e) => assert_eq!(e.status, Some(503)),
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_author_posts_uses_submitted_endpoint() {
    let server = MockServer::start_async().await;
    let submitted = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/user/someone/submitted.json")
                .query_param("sort", "top")
                .query_param("limit", "10");
            then.status(200).json_body(listing_json(&["t3_x", "t3_y"]));
        })
        .await;

    let page = unpaced(&server)
        .fetch_author_posts("someone", ListingSort::Top, 10, &session())
        .await
        .expect("Listing decodes");

    assert_eq!(page.len(), 2);
    submitted.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_publish_structured_success() {
    let server = MockServer::start_async().await;
    let comment = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/comment")
                .header("cookie", "reddit_session=cookie123")
                .body_includes("thing_id=t3_target")
                .body_includes("uh=modhash456");
            then.status(200).json_body(json!({
                "json": { "errors": [], "data": { "things": [{ "kind": "t1", "data": {} }] } }
            }));
        })
        .await;

    unpaced(&server)
        .publish("t3_target", "hello", &session())
        .await
        .expect("Comment confirmed");
    comment.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_publish_marker_mode_requires_marker() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/comment");
            then.status(200).body(r#"{"json": {"errors": []}}"#);
        })
        .await;

    let config = RedditConfig::default()
        .with_base_url(server.base_url())
        .with_confirmation(PublishConfirmation::Marker)
        .with_attribution_marker("a bot");
    let client = RedditClient::new(config, RequestPacer::new(Duration::ZERO), Duration::from_secs(5))
        .expect("Valid client");

    let err = client
        .publish("t3_target", "hello", &session())
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), HeraldErrorKind::Publish(_)));
}

#[tokio::test]
async fn test_requests_are_paced_across_endpoints() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/new.json");
            then.status(200).json_body(listing_json(&[]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/comment");
            then.status(500);
        })
        .await;

    let interval = Duration::from_millis(150);
    let client = client(&server, RequestPacer::new(interval));
    let request = ListingRequest::new("new", ListingSort::Rising, "", 1);

    let start = std::time::Instant::now();
    client
        .fetch_listing(&request, &session())
        .await
        .expect("Listing decodes");
    let _ = client.publish("t3_target", "hello", &session()).await;
    client
        .fetch_listing(&request, &session())
        .await
        .expect("Listing decodes");

    assert!(start.elapsed() >= interval * 2);
}
