#![allow(dead_code)]

use marvel_client::prelude::*;
use marvel_client::{build_auth_query, ReqwestTransport};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PUBLIC_KEY: &str = "8bd96a0e83daff033aa0e1aaf3fd1644aece99fe";
pub const PRIVATE_KEY: &str = "05b154e4641c958256743a9fa74bd16a";
pub const TS: &str = "1574726400000";

/// Helper to create a client pointed at the mock gateway
pub fn create_test_client(server: &MockServer) -> MarvelResult<MarvelClient> {
    create_client_for(&format!("{}/v1/public", server.uri()), Duration::from_secs(5))
}

pub fn create_client_for(base_url: &str, timeout: Duration) -> MarvelResult<MarvelClient> {
    let config = ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY)
        .base_url(base_url)
        .timeout(timeout);
    let transport = ReqwestTransport::new("marvel-client-tests")?;
    MarvelClient::with_parts(config, Arc::new(transport), Arc::new(FixedClock::new(TS)))
}

pub fn expected_hash() -> String {
    build_auth_query(&Credentials::new(PUBLIC_KEY, PRIVATE_KEY), TS)
        .expect("valid credentials")
        .hash
}

pub fn auth_pairs() -> Vec<(String, String)> {
    vec![
        ("apikey".to_string(), PUBLIC_KEY.to_string()),
        ("hash".to_string(), expected_hash()),
        ("ts".to_string(), TS.to_string()),
    ]
}

/// Auth pairs followed by the given filter pairs, in wire order
pub fn with_auth(filters: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs = auth_pairs();
    pairs.extend(filters.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    pairs
}

/// Answer every GET on `route` with an empty result set
pub async fn mount_ok(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "status": "Ok",
            "data": { "offset": 0, "limit": 20, "total": 0, "count": 0, "results": [] }
        })))
        .mount(server)
        .await;
}

/// Callback that forwards the response into a channel
pub fn capture() -> (
    impl FnOnce(ApiResponse) + Send + 'static,
    oneshot::Receiver<ApiResponse>,
) {
    let (tx, rx) = oneshot::channel();
    let callback = move |response: ApiResponse| {
        let _ = tx.send(response);
    };
    (callback, rx)
}

pub async fn recv(rx: oneshot::Receiver<ApiResponse>) -> ApiResponse {
    tokio::time::timeout(Duration::from_secs(10), rx)
        .await
        .expect("callback was not invoked in time")
        .expect("callback dropped without a response")
}

/// Path and query pairs of the only request the gateway saw
pub async fn single_request(server: &MockServer) -> (String, Vec<(String, String)>) {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one upstream request");

    let url = &requests[0].url;
    let pairs = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    (url.path().to_string(), pairs)
}
