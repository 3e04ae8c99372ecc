//! Request dispatch: sign, throttle, send, retry, unwrap, classify

use super::builder::DispatcherBuilder;
use super::retry::BackoffPolicy;
use super::timestamp::signing_timestamp;
use crate::config::DispatchConfig;
use crate::core::marshal::{
    Envelope, OperationRegistry, OperationSchema, RequestItem, decode_items, item_errors,
    normalize, response_errors, unwrap,
};
use crate::core::rate_limiter::RateLimiter;
use crate::core::traits::error_mapper::ErrorClassifier;
use crate::core::traits::signer::Signer;
use crate::core::traits::transport::{Transport, TransportFault};
use crate::core::types::errors::{DispatchError, Result, ServiceFault};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Wall clock used for signing timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Turns typed request items into a reliable service call
///
/// Cheap to share behind an `Arc`; every call is independent apart from the
/// shared rate limiter.
pub struct Dispatcher {
    pub(super) config: DispatchConfig,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) signer: Arc<dyn Signer>,
    pub(super) limiter: Option<Arc<RateLimiter>>,
    pub(super) operations: OperationRegistry,
    pub(super) classifier: ErrorClassifier,
    pub(super) backoff: BackoffPolicy,
    pub(super) clock: Clock,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("service_url", &self.config.service_url)
            .field("limiter", &self.limiter.as_ref().map(|l| l.key().clone()))
            .field("backoff", &self.backoff)
            .finish()
    }
}

impl Dispatcher {
    pub fn builder(config: DispatchConfig) -> DispatcherBuilder {
        DispatcherBuilder::new(config)
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Rate limiter attached to this dispatcher's endpoint, if any
    pub fn limiter(&self) -> Option<&Arc<RateLimiter>> {
        self.limiter.as_ref()
    }

    pub fn backoff(&self) -> BackoffPolicy {
        self.backoff
    }

    /// Send one item and return its single result
    pub async fn send_one<I: RequestItem>(&self, item: I) -> Result<I::Output> {
        let mut outputs = self.send(vec![item]).await?;
        match outputs.len() {
            1 => Ok(outputs.remove(0)),
            n => Err(DispatchError::service_contract(format!(
                "{} returned {} result items for one request",
                I::TYPE_NAME,
                n
            ))),
        }
    }

    /// Send a batch of same-type items as one call
    ///
    /// Returns one output per result item in service order, or exactly one
    /// classified error.
    pub async fn send<I: RequestItem>(&self, mut items: Vec<I>) -> Result<Vec<I::Output>> {
        let schema = self.operations.schema_for::<I>()?;

        for item in &mut items {
            normalize(item, self.config.default_page_size);
        }
        let mut envelope = Envelope::wrap(&schema, &items)?;

        let response = self.execute(&mut envelope).await?;
        self.interpret(&schema, &response)
    }

    /// Run the attempt loop for a wrapped envelope
    async fn execute(&self, envelope: &mut Envelope) -> Result<Value> {
        let operation = envelope.name().to_string();
        let mut backoff = self.backoff.start();
        let mut attempt: u32 = 0;

        self.sign(envelope, &operation)?;

        loop {
            attempt += 1;

            if let Some(limiter) = &self.limiter {
                limiter.acquire().await?;
            }

            debug!(operation = %operation, attempt, items = envelope.len(), "sending request");

            let fault = match self.transport.send(envelope, &operation).await {
                Ok(Some(response)) => {
                    if attempt > 1 {
                        debug!("{} succeeded on attempt {}", operation, attempt);
                    }
                    return Ok(response);
                }
                Ok(None) => return Err(self.no_response(&operation)),
                Err(fault) => fault,
            };

            if !fault.is_transient() {
                return Err(self.fatal(&operation, fault));
            }

            let Some(delay) = backoff.next_delay() else {
                error!(
                    "{} failed after {} attempts: {}",
                    operation, attempt, fault
                );
                return Err(self.exhausted(&operation, attempt, &fault));
            };

            warn!(
                "{} attempt {} failed: {}, retrying in {:?}",
                operation, attempt, fault, delay
            );
            tokio::time::sleep(delay).await;
            self.sign(envelope, &operation)?;
        }
    }

    /// Attach a fresh timestamp and signature
    fn sign(&self, envelope: &mut Envelope, operation: &str) -> Result<()> {
        let timestamp = signing_timestamp((self.clock)());
        let signature = self.signer.sign(operation, &timestamp)?;
        envelope.sign(&self.config.access_key_id, timestamp, signature);
        Ok(())
    }

    /// Unwrap results and surface service-reported errors
    fn interpret<O: serde::de::DeserializeOwned>(
        &self,
        schema: &OperationSchema,
        response: &Value,
    ) -> Result<Vec<O>> {
        let call_errors = response_errors(response);

        let items = match unwrap(schema, response) {
            Ok(items) => items,
            // A response without results usually carries the reason
            Err(contract) => return Err(self.classifier.classify(&call_errors).unwrap_or(contract)),
        };

        self.classifier.check(&call_errors)?;
        for item in &items {
            self.classifier.check(&item_errors(item))?;
        }

        decode_items(schema, items)
    }

    fn fatal(&self, operation: &str, fault: TransportFault) -> DispatchError {
        match fault {
            TransportFault::NullTarget(message) => {
                DispatchError::InvalidEndpoint(ServiceFault::message(format!(
                    "{} could not be sent to {}: {}",
                    operation, self.config.service_url, message
                )))
            }
            other => DispatchError::Transport(other),
        }
    }

    fn no_response(&self, operation: &str) -> DispatchError {
        match self.transport.last_response() {
            Some(http) => {
                DispatchError::service(format!("{} returned no response body: {}", operation, http))
            }
            None => DispatchError::NoResponse(format!(
                "{} produced neither a response nor an HTTP status",
                operation
            )),
        }
    }

    fn exhausted(&self, operation: &str, attempts: u32, fault: &TransportFault) -> DispatchError {
        let mut message = format!(
            "{} still failing after {} attempts; last fault: {}",
            operation, attempts, fault
        );
        if let Some(http) = self.transport.last_response() {
            message.push_str(&format!("; last response: {}", http));
        }
        DispatchError::service(message)
    }
}
