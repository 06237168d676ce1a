//! Integration tests using mock HTTP server
//!
//! Tests the full call flow through the public API: rate limiting, descriptor
//! handling, authentication and response decoding.

use eventbrite_client::error::Cancelled;
use eventbrite_client::resources::{CreateVenueRequest, EventSearchRequest};
use eventbrite_client::{ApiRequest, Client, ClientConfig, Context, Error, ErrorKind, Query};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Widget {
    id: String,
    name: String,
}

#[derive(Debug, Default, Serialize)]
struct WidgetFilter {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "page")]
    page: i64,
}

impl ApiRequest for WidgetFilter {}

fn client(server: &MockServer, requests_per_second: u32) -> Client {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .token("abc123")
        .rate_limit(requests_per_second)
        .build();
    Client::with_config(config).unwrap()
}

async fn mount_widget(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/widgets/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "name": "Blue"
        })))
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |r| r.len())
}

// ============================================================================
// Request Flow
// ============================================================================

#[tokio::test]
async fn test_get_decodes_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/widgets/42/"))
        .and(query_param("token", "abc123"))
        .and(query_param("expand", "venue,category,subcategories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "name": "Blue"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let widget: Widget = client(&server, 5)
        .get_json(&Context::background(), "/widgets/42/")
        .await
        .unwrap();

    assert_eq!(
        widget,
        Widget {
            id: "42".into(),
            name: "Blue".into()
        }
    );
}

#[tokio::test]
async fn test_get_surfaces_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/widgets/404/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NOT_FOUND",
            "error_description": "The widget you requested does not exist.",
            "status_code": 404
        })))
        .mount(&server)
        .await;

    let err = client(&server, 5)
        .get_json::<Widget>(&Context::background(), "/widgets/404/")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(
        err.to_string(),
        "Eventbrite API: [Status code - 404] The widget you requested does not exist."
    );
    let api = err.as_api_error().unwrap();
    assert_eq!(api.error, "NOT_FOUND");
    assert_eq!(api.status_code, 404);
}

#[tokio::test]
async fn test_descriptor_keys_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/widgets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "x"})))
        .mount(&server)
        .await;

    let filter = WidgetFilter {
        name: "Blue Widget & Co".into(),
        page: 3,
    };
    let expected = filter.to_query().unwrap();
    let _: Widget = client(&server, 0)
        .get_json_with(&Context::background(), "/widgets/", &filter)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let sent: Query = received[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .filter(|(k, _)| k != "token" && k != "expand")
        .collect();
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let server = MockServer::start().await;

    let err = client(&server, 5)
        .create_venue(&Context::background(), &CreateVenueRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Validation failed: 'venue.name' is required");
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let server = MockServer::start().await;
    let client = Client::with_config(
        ClientConfig::builder()
            .base_url(server.uri())
            .no_rate_limit()
            .build(),
    )
    .unwrap();
    let ctx = Context::background();

    let search = client
        .search_events(&ctx, &EventSearchRequest::default())
        .await;
    let publish = client.publish_event(&ctx, "42").await;
    let delete = client.delete_event(&ctx, "42").await;

    for result in [search.map(|_| ()), publish.map(|_| ()), delete.map(|_| ())] {
        assert!(matches!(result, Err(Error::MissingToken)));
    }
    assert_eq!(request_count(&server).await, 0);
}

// ============================================================================
// Rate Limiting
// ============================================================================

#[tokio::test]
async fn test_rate_limit_suspends_past_burst() {
    let server = MockServer::start().await;
    mount_widget(&server).await;
    let client = client(&server, 2);
    let ctx = Context::background();

    let start = Instant::now();
    for _ in 0..3 {
        let _: Widget = client.get_json(&ctx, "/widgets/42/").await.unwrap();
    }
    let elapsed = start.elapsed();

    // Two permits at start, the third refills after 1/2 s
    assert!(elapsed >= Duration::from_millis(400), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "elapsed {elapsed:?}");
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_rate_limit_disabled_never_suspends() {
    let server = MockServer::start().await;
    mount_widget(&server).await;
    let client = client(&server, 0);
    assert!(!client.has_rate_limiter());
    let ctx = Context::background();

    let start = Instant::now();
    for _ in 0..10 {
        let _: Widget = client.get_json(&ctx, "/widgets/42/").await.unwrap();
    }

    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(request_count(&server).await, 10);
}

#[tokio::test]
async fn test_cancel_while_waiting_for_permit() {
    let server = MockServer::start().await;
    mount_widget(&server).await;
    let client = client(&server, 1);

    let _: Widget = client
        .get_json(&Context::background(), "/widgets/42/")
        .await
        .unwrap();
    assert_eq!(request_count(&server).await, 1);

    let (ctx, handle) = Context::background().with_cancel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();
    });

    let start = Instant::now();
    let err = client
        .get_json::<Widget>(&ctx, "/widgets/42/")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled(Cancelled::Cancelled)));
    assert!(start.elapsed() < Duration::from_millis(900));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_deadline_while_waiting_for_permit() {
    let server = MockServer::start().await;
    mount_widget(&server).await;
    let client = client(&server, 1);

    let _: Widget = client
        .get_json(&Context::background(), "/widgets/42/")
        .await
        .unwrap();

    let ctx = Context::background().with_timeout(Duration::from_millis(50));
    let err = client
        .get_json::<Widget>(&ctx, "/widgets/42/")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancellation);
    assert!(matches!(err, Error::Cancelled(Cancelled::DeadlineExceeded)));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_clones_share_the_limiter() {
    let server = MockServer::start().await;
    mount_widget(&server).await;
    let first = client(&server, 1);
    let second = first.clone();

    let _: Widget = first
        .get_json(&Context::background(), "/widgets/42/")
        .await
        .unwrap();

    let ctx = Context::background().with_timeout(Duration::from_millis(50));
    let err = second
        .get_json::<Widget>(&ctx, "/widgets/42/")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancellation);
    assert_eq!(request_count(&server).await, 1);
}
