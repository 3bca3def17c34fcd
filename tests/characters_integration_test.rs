mod common;

use common::*;
use marvel_client::prelude::*;
use marvel_client::{
    id_list, CharacterComicFilter, CharacterEventFilter, CharacterSeriesFilter,
    CharacterStoryFilter,
};
use wiremock::MockServer;

/// Test listing characters with a limit
#[tokio::test]
async fn test_list_characters_with_limit() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let filter = CharacterFilter {
        limit: Some(1),
        ..Default::default()
    };
    let (callback, rx) = capture();
    client.characters().list(&filter, callback).expect("Failed to dispatch");

    let response = recv(rx).await;
    assert!(response.is_success(), "List should succeed: {:?}", response.error);
    assert_eq!(response.status, Some(200));

    let (path, query) = single_request(&server).await;
    assert_eq!(path, "/v1/public/characters");
    assert_eq!(query, with_auth(&[("limit", "1")]));
}

/// Test that every list filter lands under its own key
#[tokio::test]
async fn test_list_characters_with_all_filters() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let filter = CharacterFilter {
        order_by: Some("-modified".to_string()),
        name: Some("Spider-Man".to_string()),
        name_starts_with: Some("Spi".to_string()),
        modified_since: Some("2014-01-01".to_string()),
        offset: Some(40),
        limit: Some(20),
        comics: Some(id_list([21366, 24571])),
        series: Some("1945".to_string()),
        events: Some("116".to_string()),
        stories: Some("22500".to_string()),
    };
    let (callback, rx) = capture();
    client.characters().list(&filter, callback).expect("Failed to dispatch");
    recv(rx).await;

    let (_, query) = single_request(&server).await;
    assert_eq!(
        query,
        with_auth(&[
            ("orderBy", "-modified"),
            ("name", "Spider-Man"),
            ("nameStartsWith", "Spi"),
            ("modifiedSince", "2014-01-01"),
            ("offset", "40"),
            ("limit", "20"),
            ("comics", "21366,24571"),
            ("series", "1945"),
            ("events", "116"),
            ("stories", "22500"),
        ])
    );
}

/// Test fetching a single character sends the id as a query parameter
#[tokio::test]
async fn test_get_single_character() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let (callback, rx) = capture();
    client.characters().get(1011334, callback).expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    let (path, query) = single_request(&server).await;
    assert_eq!(path, "/v1/public/characters", "Id must not be a path segment");
    assert_eq!(query, with_auth(&[("id", "1011334")]));
}

/// Test comics for a character with no filters
#[tokio::test]
async fn test_character_comics_without_filters() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters/1011334/comics").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let (callback, rx) = capture();
    client
        .characters()
        .comics(1011334, &CharacterComicFilter::default(), callback)
        .expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    let (path, query) = single_request(&server).await;
    assert_eq!(path, "/v1/public/characters/1011334/comics");
    assert_eq!(query, auth_pairs());
}

/// Test comic filters use their declared wire keys
#[tokio::test]
async fn test_character_comics_filter_keys() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    mount_ok(&server, "/v1/public/characters/1011334/comics").await;
    let client = create_test_client(&server).expect("Failed to create client");

    let filter = CharacterComicFilter {
        format: Some("comic".to_string()),
        no_variants: Some(true),
        date_range: Some("2013-01-01,2013-01-02".to_string()),
        start_year: Some(2013),
        has_digital_issue: Some(false),
        ..Default::default()
    };
    let (callback, rx) = capture();
    client
        .characters()
        .comics(1011334, &filter, callback)
        .expect("Failed to dispatch");
    recv(rx).await;

    let (_, query) = single_request(&server).await;
    assert_eq!(
        query,
        with_auth(&[
            ("format", "comic"),
            ("noVariants", "true"),
            ("dataRange", "2013-01-01,2013-01-02"),
            ("startYear", "2013"),
            ("hasDigitalIssue", "false"),
        ])
    );
}

/// Test events, series and stories for a character
#[tokio::test]
async fn test_character_relationships() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    let client = create_test_client(&server).expect("Failed to create client");

    mount_ok(&server, "/v1/public/characters/1009610/events").await;
    let (callback, rx) = capture();
    let filter = CharacterEventFilter {
        name_starts_with: Some("Civil".to_string()),
        ..Default::default()
    };
    client
        .characters()
        .events(1009610, &filter, callback)
        .expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    mount_ok(&server, "/v1/public/characters/1009610/series").await;
    let (callback, rx) = capture();
    let filter = CharacterSeriesFilter {
        series_type: Some("ongoing".to_string()),
        start_year: Some(1963),
        ..Default::default()
    };
    client
        .characters()
        .series(1009610, &filter, callback)
        .expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    mount_ok(&server, "/v1/public/characters/1009610/stories").await;
    let (callback, rx) = capture();
    let filter = CharacterStoryFilter {
        offset: Some(10),
        ..Default::default()
    };
    client
        .characters()
        .stories(1009610, &filter, callback)
        .expect("Failed to dispatch");
    assert!(recv(rx).await.is_success());

    let requests = server.received_requests().await.expect("recording enabled");
    let seen: Vec<(String, Option<String>)> = requests
        .iter()
        .map(|r| (r.url.path().to_string(), r.url.query().map(str::to_string)))
        .collect();

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].0, "/v1/public/characters/1009610/events");
    assert!(seen[0].1.as_deref().unwrap().ends_with("nameStartsWith=Civil"));
    assert_eq!(seen[1].0, "/v1/public/characters/1009610/series");
    assert!(seen[1].1.as_deref().unwrap().ends_with("seriesType=ongoing&startYear=1963"));
    assert_eq!(seen[2].0, "/v1/public/characters/1009610/stories");
    assert!(seen[2].1.as_deref().unwrap().ends_with("offset=10"));
}
