//! Dispatcher end-to-end tests over a scripted transport

use crate::common::{
    ErrorAssertions, HitResponseFactory, PRODUCTION_URL, SANDBOX_URL, ScriptedTransport,
    StaticSigner,
};
use mturk_dispatch::core::operations::{
    ApproveAssignmentRequest, GetAccountBalanceRequest, GetAssignmentsForHitRequest,
};
use mturk_dispatch::{
    DispatchConfig, Dispatcher, ErrorKind, RateLimiterRegistry, TransportFault,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn build(url: &str, transport: Arc<ScriptedTransport>) -> Dispatcher {
    Dispatcher::builder(DispatchConfig::new(url).with_credentials("AKID", "secret"))
        .transport(transport)
        .signer(StaticSigner::new())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_hits_in_one_call() {
    let transport = ScriptedTransport::new(vec![HitResponseFactory::reply(&["h-1", "h-2", "h-3"])]);
    let dispatcher = build(PRODUCTION_URL, transport.clone());

    let hits = dispatcher
        .send(vec![
            HitResponseFactory::request("one"),
            HitResponseFactory::request("two"),
            HitResponseFactory::request("three"),
        ])
        .await
        .unwrap();

    assert_eq!(hits.len(), 3);
    assert_eq!(hits[2].hit_id, "h-3");
    assert_eq!(hits[0].hit_status.as_deref(), Some("Assignable"));
    assert_eq!(transport.operations(), vec!["CreateHIT"]);

    let envelope = &transport.envelopes()[0];
    assert_eq!(envelope.len(), 3);
    assert_eq!(envelope.credential_id, "AKID");
    let timestamp = envelope.timestamp.clone().unwrap();
    assert_eq!(
        envelope.signature.as_deref(),
        Some(format!("CreateHIT:{}", timestamp).as_str())
    );
}

#[tokio::test]
async fn test_item_error_is_classified() {
    let transport = ScriptedTransport::new(vec![Ok(Some(HitResponseFactory::item_failure(
        "AWS.MechanicalTurk.InvalidHITState",
        "HIT is disposed",
    )))]);
    let dispatcher = build(PRODUCTION_URL, transport);

    let err = dispatcher
        .send_one(HitResponseFactory::request("a"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::InvalidState);
    err.assert_mentions("AWS.MechanicalTurk.InvalidHITState: HIT is disposed");
}

#[tokio::test]
async fn test_unknown_code_is_generic_service_error() {
    let transport = ScriptedTransport::new(vec![Ok(Some(HitResponseFactory::item_failure(
        "AWS.MechanicalTurk.SomethingNew",
        "unexpected",
    )))]);
    let dispatcher = build(PRODUCTION_URL, transport);

    let err = dispatcher
        .send_one(HitResponseFactory::request("a"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::Service);
    assert_eq!(err.fault().unwrap().codes(), vec!["AWS.MechanicalTurk.SomethingNew"]);
}

#[tokio::test]
async fn test_paged_listing_uses_configured_page_size() {
    let transport = ScriptedTransport::new(vec![Ok(Some(json!({
        "GetAssignmentsForHITResult": {
            "Request": {"IsValid": "True"},
            "NumResults": 1,
            "PageNumber": 1,
            "TotalNumResults": 1,
            "Assignment": {"AssignmentId": "a-1", "WorkerId": "w-1", "HITId": "h-1"}
        }
    })))]);
    let dispatcher = Dispatcher::builder(
        DispatchConfig::new(PRODUCTION_URL).with_default_page_size(250),
    )
    .transport(transport.clone())
    .signer(StaticSigner::new())
    .build()
    .unwrap();

    let page = dispatcher
        .send_one(GetAssignmentsForHitRequest::new("h-1"))
        .await
        .unwrap();

    assert_eq!(page.total_num_results, 1);
    assert_eq!(
        transport.envelopes()[0].request[0],
        json!({"HITId": "h-1", "PageSize": 100, "PageNumber": 1})
    );
}

#[tokio::test]
async fn test_account_balance() {
    let transport = ScriptedTransport::new(vec![Ok(Some(json!({
        "GetAccountBalanceResult": [{
            "Request": {"IsValid": "True"},
            "AvailableBalance": {"Amount": 10000.0, "CurrencyCode": "USD", "FormattedPrice": "$10,000.00"}
        }]
    })))]);
    let dispatcher = build(PRODUCTION_URL, transport.clone());

    let balance = dispatcher
        .send_one(GetAccountBalanceRequest::default())
        .await
        .unwrap();

    assert_eq!(*balance.available_balance.amount, 10000.0);
    assert!(balance.on_hold_balance.is_none());
    assert_eq!(transport.envelopes()[0].request[0], json!({}));
}

#[tokio::test(start_paused = true)]
async fn test_throttled_service_recovers() {
    let transport = ScriptedTransport::new(vec![
        Err(TransportFault::HttpStatus {
            status: 503,
            message: "Service Unavailable".into(),
        }),
        Err(TransportFault::Timeout("read timed out".into())),
        Ok(Some(json!({"ApproveAssignmentResult": [{"Request": {"IsValid": "True"}}]}))),
    ]);
    let signer = StaticSigner::new();
    let dispatcher = Dispatcher::builder(DispatchConfig::new(PRODUCTION_URL))
        .transport(transport.clone())
        .signer(signer.clone())
        .build()
        .unwrap();

    let start = Instant::now();
    dispatcher
        .send_one(ApproveAssignmentRequest::new("a-1"))
        .await
        .unwrap();

    assert_eq!(transport.calls(), 3);
    assert_eq!(signer.calls(), 3);
    // 1000 ms after the 503, 2000 ms after the timeout
    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert!(start.elapsed() < Duration::from_millis(3100));
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_reports_last_http_response() {
    let transport = ScriptedTransport::always(Err(TransportFault::HttpStatus {
        status: 500,
        message: "Internal Server Error".into(),
    }));
    transport.set_last_response(500, "Internal Server Error");
    let dispatcher = build(PRODUCTION_URL, transport.clone());

    let err = dispatcher
        .send_one(ApproveAssignmentRequest::new("a-1"))
        .await
        .unwrap_err();

    err.assert_kind(ErrorKind::Service);
    err.assert_mentions("HTTP 500 Internal Server Error");
    assert_eq!(transport.calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_sandbox_dispatchers_share_throughput() {
    let registry = Arc::new(RateLimiterRegistry::new());
    let transport = ScriptedTransport::always(HitResponseFactory::reply(&["h-1"]));

    let dispatchers: Vec<Arc<Dispatcher>> = (0..2)
        .map(|_| {
            Arc::new(
                Dispatcher::builder(DispatchConfig::new(SANDBOX_URL))
                    .transport(transport.clone())
                    .signer(StaticSigner::new())
                    .limiters(registry.clone())
                    .build()
                    .unwrap(),
            )
        })
        .collect();

    let start = Instant::now();
    let mut handles = Vec::new();
    for i in 0..26 {
        let dispatcher = dispatchers[i % 2].clone();
        handles.push(tokio::spawn(async move {
            dispatcher
                .send_one(HitResponseFactory::request("burst"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // 20 calls from the initial burst, then 2 per second
    assert_eq!(transport.calls(), 26);
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert!(start.elapsed() < Duration::from_secs(4));
    assert_eq!(registry.len(), 1);
}
