//! HTTP transport tests against a mock server

use crate::common::{ErrorAssertions, HitResponseFactory};
use mturk_dispatch::core::marshal::Envelope;
use mturk_dispatch::core::operations::GetHitRequest;
use mturk_dispatch::{
    DispatchConfig, Dispatcher, ErrorKind, HttpTransport, OperationRegistry, Transport,
    TransportFault,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE: &str = "AWSMechanicalTurkRequester";
const VERSION: &str = "2014-08-15";

fn transport(server: &MockServer, timeout: Duration) -> HttpTransport {
    HttpTransport::new(server.uri(), SERVICE, VERSION, timeout).unwrap()
}

fn envelope() -> Envelope {
    let schema = OperationRegistry::standard()
        .schema_for::<GetHitRequest>()
        .unwrap();
    let mut envelope = Envelope::wrap_one(&schema, &GetHitRequest::new("h-1")).unwrap();
    envelope.sign("AKID", "2024-05-01T12:00:00.001Z".into(), "sig".into());
    envelope
}

fn dispatcher(server: &MockServer) -> Dispatcher {
    let config = DispatchConfig::new(server.uri())
        .with_credentials("AKID", "secret")
        .with_retry_delays(10, 40);
    Dispatcher::builder(config).build().unwrap()
}

#[tokio::test]
async fn test_posts_signed_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Service", SERVICE))
        .and(query_param("Operation", "GetHIT"))
        .and(query_param("Version", VERSION))
        .and(body_partial_json(json!({
            "AWSAccessKeyId": "AKID",
            "Timestamp": "2024-05-01T12:00:00.001Z",
            "Signature": "sig",
            "Request": [{"HITId": "h-1"}],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Server", "MockTurk")
                .set_body_json(HitResponseFactory::success(&["h-1"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport(&server, Duration::from_secs(5));
    let response = transport.send(&envelope(), "GetHIT").await.unwrap().unwrap();

    assert_eq!(response["HIT"][0]["HITId"], "h-1");
    let last = transport.last_response().unwrap();
    assert_eq!(last.status, 200);
    assert_eq!(last.status_text, "OK");
    assert_eq!(last.server.as_deref(), Some("MockTurk"));
}

#[tokio::test]
async fn test_error_status_maps_to_http_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&server)
        .await;

    let transport = transport(&server, Duration::from_secs(5));
    let fault = transport.send(&envelope(), "GetHIT").await.unwrap_err();

    assert_eq!(
        fault,
        TransportFault::HttpStatus {
            status: 503,
            message: "try later".into()
        }
    );
    assert!(fault.is_transient());
    assert_eq!(transport.last_response().unwrap().status, 503);
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let transport = transport(&server, Duration::from_millis(50));
    let fault = transport.send(&envelope(), "GetHIT").await.unwrap_err();

    assert!(matches!(fault, TransportFault::Timeout(_)), "{:?}", fault);
}

#[tokio::test]
async fn test_empty_body_is_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let transport = transport(&server, Duration::from_secs(5));
    assert_eq!(transport.send(&envelope(), "GetHIT").await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_json_is_io_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<xml/>"))
        .mount(&server)
        .await;

    let transport = transport(&server, Duration::from_secs(5));
    let fault = transport.send(&envelope(), "GetHIT").await.unwrap_err();
    assert!(matches!(fault, TransportFault::Io(_)));
    assert!(!fault.is_transient());
}

#[tokio::test]
async fn test_dispatcher_retries_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(HitResponseFactory::success(&["h-1"])))
        .mount(&server)
        .await;

    let hit = dispatcher(&server)
        .send_one(GetHitRequest::new("h-1"))
        .await
        .unwrap();

    assert_eq!(hit.hit_id, "h-1");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    let signatures: Vec<String> = requests
        .iter()
        .map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).unwrap())
        .map(|body| body["Signature"].as_str().unwrap_or_default().to_string())
        .collect();
    assert!(signatures.iter().all(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_dispatcher_gives_up_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).insert_header("Server", "MockTurk"))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .send_one(GetHitRequest::new("h-1"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::Service);
    err.assert_mentions("HTTP 503 Service Unavailable (server: MockTurk)");
    // delays 10 and 20 ms fit under the 40 ms ceiling, 40 ms does not
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_client_error_is_not_retried_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .send_one(GetHitRequest::new("h-1"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::Transport);
    err.assert_mentions("HTTP 400");
}

#[tokio::test]
async fn test_empty_body_reports_http_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .send_one(GetHitRequest::new("h-1"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::Service);
    err.assert_mentions("HTTP 200 OK");
}
