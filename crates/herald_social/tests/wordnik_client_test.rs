//! HTTP-level tests for the Wordnik client.

use herald_error::HeraldErrorKind;
use herald_interface::LexiconSource;
use herald_social::{WordnikClient, WordnikConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn client(server: &MockServer) -> WordnikClient {
    let config = WordnikConfig::new("key123").with_base_url(server.url("/v4"));
    WordnikClient::new(config, Duration::from_secs(5)).expect("Valid client")
}

#[tokio::test]
async fn test_top_example_sends_key_and_parses() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v4/word.json/serendipity/topExample")
                .query_param("useCanonical", "false")
                .header("api_key", "key123");
            then.status(200).json_body(json!({
                "url": "http://example.com/source",
                "text": "Finding it was pure serendipity.",
                "year": 2012
            }));
        })
        .await;

    let example = client(&server)
        .top_example("serendipity")
        .await
        .expect("Lookup succeeds");

    assert_eq!(example.text(), "Finding it was pure serendipity.");
    assert_eq!(example.source_url(), "http://example.com/source");
    lookup.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_not_found_is_empty_example() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/word.json/xyzzy/topExample");
            then.status(404).json_body(json!({ "message": "Not found" }));
        })
        .await;

    let example = client(&server).top_example("xyzzy").await.expect("Not an error");
    assert!(example.is_empty());
}

#[tokio::test]
async fn test_unauthorized_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/word.json/cat/topExample");
            then.status(401).json_body(json!({ "message": "unauthorized" }));
        })
        .await;

    let err = client(&server).top_example("cat").await.unwrap_err();
    match err.kind() {
        HeraldErrorKind::Transport(e) => assert_eq!(e.status, Some(401)),
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v4/word.json/cat/topExample");
            then.status(200).body("not json");
        })
        .await;

    let err = client(&server).top_example("cat").await.unwrap_err();
    assert!(matches!(err.kind(), HeraldErrorKind::Decode(_)));
}
