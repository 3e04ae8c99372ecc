//! Test fixtures and data factories

use async_trait::async_trait;
use mturk_dispatch::core::marshal::Envelope;
use mturk_dispatch::core::operations::CreateHitRequest;
use mturk_dispatch::{HttpResponseInfo, Result, Signer, Transport, TransportFault};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type Reply = std::result::Result<Option<Value>, TransportFault>;

/// Transport that replays canned replies in order
///
/// Once the script runs out it keeps answering with the fallback reply,
/// if one was set.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    fallback: Mutex<Option<Reply>>,
    last_response: Mutex<Option<HttpResponseInfo>>,
    sent: Mutex<Vec<(String, Envelope)>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        })
    }

    /// Answer every call with `reply`
    pub fn always(reply: Reply) -> Arc<Self> {
        let transport = Self::new(Vec::new());
        *transport.fallback.lock() = Some(reply);
        transport
    }

    pub fn set_last_response(&self, status: u16, status_text: &str) {
        *self.last_response.lock() = Some(HttpResponseInfo {
            status,
            status_text: status_text.to_string(),
            server: None,
        });
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn operations(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(op, _)| op.clone()).collect()
    }

    pub fn envelopes(&self) -> Vec<Envelope> {
        self.sent.lock().iter().map(|(_, e)| e.clone()).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, envelope: &Envelope, operation: &str) -> Reply {
        self.sent
            .lock()
            .push((operation.to_string(), envelope.clone()));
        if let Some(reply) = self.replies.lock().pop_front() {
            return reply;
        }
        self.fallback
            .lock()
            .clone()
            .unwrap_or_else(|| Err(TransportFault::Io("script exhausted".into())))
    }

    fn last_response(&self) -> Option<HttpResponseInfo> {
        self.last_response.lock().clone()
    }
}

/// Signer returning `<operation>:<timestamp>` and counting calls
#[derive(Debug, Default)]
pub struct StaticSigner {
    calls: AtomicUsize,
}

impl StaticSigner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Signer for StaticSigner {
    fn sign(&self, operation: &str, timestamp: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}:{}", operation, timestamp))
    }
}

/// Factory for HIT responses and requests
pub struct HitResponseFactory;

impl HitResponseFactory {
    /// Successful `CreateHIT`/`GetHIT` response carrying the given ids
    pub fn success(ids: &[&str]) -> Value {
        let hits: Vec<Value> = ids
            .iter()
            .map(|id| {
                json!({
                    "Request": {"IsValid": "True"},
                    "HITId": id,
                    "HITTypeId": "type-1",
                    "Title": format!("Task {}", id),
                    "HITStatus": "Assignable",
                })
            })
            .collect();
        json!({
            "OperationRequest": {"RequestId": "req-1"},
            "HIT": hits,
        })
    }

    pub fn reply(ids: &[&str]) -> Reply {
        Ok(Some(Self::success(ids)))
    }

    /// Response whose only item failed with `code`
    pub fn item_failure(code: &str, message: &str) -> Value {
        json!({
            "OperationRequest": {"RequestId": "req-1"},
            "HIT": [{
                "Request": {
                    "IsValid": "False",
                    "Errors": {"Error": [{"Code": code, "Message": message}]}
                }
            }]
        })
    }

    pub fn request(title: &str) -> CreateHitRequest {
        let mut request = CreateHitRequest::default();
        *request.title = title.to_string();
        request
    }
}
