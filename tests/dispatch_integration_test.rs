mod common;

use common::*;
use marvel_client::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test non-2xx responses are delivered as data, not errors
#[tokio::test]
async fn test_upstream_error_status_is_data() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/public/characters"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "InvalidCredentials",
            "message": "That hash, timestamp and key combination is invalid."
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = create_test_client(&server).expect("Failed to create client");

    let (callback, rx) = capture();
    client
        .characters()
        .list(&CharacterFilter::default(), callback)
        .expect("Failed to dispatch");

    let response = recv(rx).await;
    assert!(response.error.is_none(), "Status codes are not classified as errors");
    assert_eq!(response.status, Some(401));
    assert!(!response.is_success());

    let body: serde_json::Value = response.json().expect("Body should be JSON");
    assert_eq!(body["code"], "InvalidCredentials");
}

/// Test the raw body bytes are handed through untouched
#[tokio::test]
async fn test_body_bytes_are_passed_through() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/public/comics"))
        .and(query_param("id", "183"))
        .and(query_param("apikey", PUBLIC_KEY))
        .and(query_param("hash", expected_hash()))
        .and(query_param("ts", TS))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&server)
        .await;
    let client = create_test_client(&server).expect("Failed to create client");

    let (callback, rx) = capture();
    client.comics().get(183, callback).expect("Failed to dispatch");

    let (status, body) = recv(rx).await.into_result().expect("No transport error");
    assert_eq!(status, 200);
    assert_eq!(&body[..], b"not json at all");
}

/// Test a refused connection is delivered to the callback, not raised
#[tokio::test]
async fn test_connection_failure_goes_to_callback() {
    let _ = env_logger::try_init();

    let client = create_client_for("http://127.0.0.1:1/v1/public", Duration::from_secs(5))
        .expect("Failed to create client");

    let (callback, rx) = capture();
    let dispatched = client
        .characters()
        .comics(1011334, &Default::default(), callback);
    assert!(dispatched.is_ok(), "Transport failures must not be synchronous");

    let response = recv(rx).await;
    assert!(response.body.is_none());
    assert!(response.status.is_none());
    let error = response.error.expect("Transport error expected");
    assert!(error.is_transport_error());
}

/// Test a host that cannot be resolved is delivered to the callback
#[tokio::test]
async fn test_dns_failure_goes_to_callback() {
    let _ = env_logger::try_init();

    let client = create_client_for(
        "http://gateway.marvel-client-test.invalid/v1/public",
        Duration::from_secs(5),
    )
    .expect("Failed to create client");

    let (callback, rx) = capture();
    client
        .events()
        .list(&EventFilter::default(), callback)
        .expect("Failed to dispatch");

    let response = recv(rx).await;
    assert!(response.body.is_none());
    assert!(response.status.is_none());
    assert!(response.error.expect("Transport error expected").is_transport_error());
}

/// Test the per-request timeout is enforced
#[tokio::test]
async fn test_request_timeout() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let client = create_client_for(
        &format!("{}/v1/public", server.uri()),
        Duration::from_millis(200),
    )
    .expect("Failed to create client");
    assert_eq!(client.timeout(), Duration::from_millis(200));

    let (callback, rx) = capture();
    client
        .stories()
        .list(&StoryFilter::default(), callback)
        .expect("Failed to dispatch");

    let error = recv(rx).await.error.expect("Timeout expected");
    assert!(error.is_transport_error());
    assert!(error.is_timeout());
}

/// Test many calls in flight at once each complete exactly once
#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
        .expect(12)
        .mount(&server)
        .await;
    let client = create_test_client(&server).expect("Failed to create client");

    let mut receivers = Vec::new();
    for id in 0..6u64 {
        let (callback, rx) = capture();
        client.characters().get(id, callback).expect("Failed to dispatch");
        receivers.push(rx);

        let (callback, rx) = capture();
        client
            .series()
            .events(id, &Default::default(), callback)
            .expect("Failed to dispatch");
        receivers.push(rx);
    }

    for rx in receivers {
        assert!(recv(rx).await.is_success());
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 12);
}

/// Test the future-returning path shares the builder and transport
#[tokio::test]
async fn test_execute_built_url() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/creators/6606/series").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let url = client
        .request_builder()
        .related_url(
            Resource::Creators,
            6606,
            Resource::Series,
            &marvel_client::CreatorSeriesFilter::default(),
        )
        .expect("Failed to build URL");
    let response = client.execute(url).await;

    assert!(response.is_success());
    let body: serde_json::Value = response.json().expect("Body should be JSON");
    assert_eq!(body["data"]["count"], 0);
}

/// Test a fresh timestamp is used per request with the system clock
#[tokio::test]
async fn test_system_clock_signs_each_request() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters").await;
    let config = ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY)
        .base_url(format!("{}/v1/public", server.uri()));
    let client = MarvelClient::with_config(config).expect("Failed to create client");

    let (callback, rx) = capture();
    client
        .characters()
        .list(&CharacterFilter::default(), callback)
        .expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    let (_, query) = single_request(&server).await;
    let ts = &query.iter().find(|(k, _)| k == "ts").expect("ts param").1;
    let hash = &query.iter().find(|(k, _)| k == "hash").expect("hash param").1;
    assert!(ts.parse::<i64>().is_ok());

    let expected = marvel_client::build_auth_query(&Credentials::new(PUBLIC_KEY, PRIVATE_KEY), ts)
        .expect("valid credentials");
    assert_eq!(hash, &expected.hash);
}

/// Test empty credentials are rejected before any request is made
#[test]
fn test_empty_credentials_fail_synchronously() {
    let result = MarvelClient::new("", PRIVATE_KEY);
    assert!(result.err().expect("Empty key must fail").is_config_error());

    let result = MarvelClient::new(PUBLIC_KEY, "");
    assert!(result.err().expect("Empty key must fail").is_config_error());
}

/// Test a malformed base URL is rejected before any request is made
#[test]
fn test_bad_base_url_fails_synchronously() {
    let config = ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY).base_url("gateway.marvel.com/v1/public");
    let result = MarvelClient::with_config(config);
    assert!(result.err().expect("Bad base URL must fail").is_config_error());
}

/// Test a base URL carrying a query or fragment is rejected at construction
#[test]
fn test_base_url_with_query_or_fragment_fails_synchronously() {
    for base in [
        "https://gateway.marvel.com/v1/public#x",
        "https://gateway.marvel.com/v1/public?x=1",
    ] {
        let result = create_client_for(base, Duration::from_secs(1));
        assert!(
            result.err().expect("Base URL must be rejected").is_config_error(),
            "{} should not build a client",
            base
        );
    }
}

/// Test dispatching outside a tokio runtime fails synchronously
#[test]
fn test_dispatch_without_runtime_fails_synchronously() {
    let client = create_client_for("http://127.0.0.1:1/v1/public", Duration::from_secs(1))
        .expect("Failed to create client");

    let (callback, _rx) = capture();
    let result = client
        .characters()
        .list(&CharacterFilter::default(), callback);
    assert!(result.expect_err("No runtime available").is_config_error());
}

/// Test the client can share one reqwest pool and be cloned across tasks
#[tokio::test]
async fn test_cloned_clients_share_pool() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/comics").await;
    let client = create_test_client(&server).expect("Failed to create client");
    let shared = Arc::new(client.clone());

    let task = tokio::spawn(async move {
        let (callback, rx) = capture();
        shared
            .comics()
            .list(&ComicFilter::default(), callback)
            .expect("Failed to dispatch");
        recv(rx).await
    });

    assert!(task.await.expect("task panicked").is_success());
    assert_eq!(client.base_url().path(), "/v1/public");
}
