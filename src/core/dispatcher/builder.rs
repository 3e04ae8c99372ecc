//! Dispatcher builder

use super::dispatcher::{Clock, Dispatcher};
use super::retry::BackoffPolicy;
use crate::config::DispatchConfig;
use crate::core::marshal::OperationRegistry;
use crate::core::rate_limiter::RateLimiterRegistry;
use crate::core::traits::error_mapper::ErrorClassifier;
use crate::core::traits::signer::Signer;
use crate::core::traits::transport::Transport;
use crate::core::types::errors::{DispatchError, Result};
use crate::utils::auth::crypto::hmac::HmacSigner;
use crate::utils::net::http::HttpTransport;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Assembles a [`Dispatcher`] from configuration and collaborators
///
/// Anything not supplied falls back to the bundled implementation: an
/// [`HttpTransport`] for the configured endpoint, an [`HmacSigner`] over the
/// configured secret and the standard naming and classification tables.
/// A throttled endpoint (sandbox or explicit `rate_limit`) has no fallback:
/// the limiter registry must be injected so every dispatcher for that
/// endpoint draws from the same bucket.
pub struct DispatcherBuilder {
    config: DispatchConfig,
    transport: Option<Arc<dyn Transport>>,
    signer: Option<Arc<dyn Signer>>,
    limiters: Option<Arc<RateLimiterRegistry>>,
    operations: Option<OperationRegistry>,
    classifier: Option<ErrorClassifier>,
    clock: Option<Clock>,
}

impl DispatcherBuilder {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            transport: None,
            signer: None,
            limiters: None,
            operations: None,
            classifier: None,
            clock: None,
        }
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Registry that owns the shared per-endpoint limiters
    pub fn limiters(mut self, registry: Arc<RateLimiterRegistry>) -> Self {
        self.limiters = Some(registry);
        self
    }

    pub fn operations(mut self, registry: OperationRegistry) -> Self {
        self.operations = Some(registry);
        self
    }

    pub fn classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Clock for signing timestamps
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Validate configuration and assemble the dispatcher
    ///
    /// Attaching a limiter spawns its refill task, so a sandbox or
    /// rate-limited configuration must be built inside a tokio runtime and
    /// with a registry from [`Self::limiters`].
    pub fn build(self) -> Result<Dispatcher> {
        let config = self.config;
        config.check()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::from_config(&config)?),
        };

        let signer: Arc<dyn Signer> = match self.signer {
            Some(signer) => signer,
            None => Arc::new(HmacSigner::from_config(&config)?),
        };

        let limiter = match config.limiter_key() {
            Some(key) => {
                let Some(registry) = self.limiters else {
                    return Err(DispatchError::config(format!(
                        "{} is throttled to {}; supply the shared limiter registry with .limiters()",
                        config.service_url, key
                    )));
                };
                let limiter = registry.get_or_create(&key)?;
                info!("Throttling {} to {}", config.service_url, key);
                Some(limiter)
            }
            None => None,
        };

        Ok(Dispatcher {
            backoff: BackoffPolicy::from_config(&config),
            transport,
            signer,
            limiter,
            operations: self.operations.unwrap_or_else(OperationRegistry::standard),
            classifier: self.classifier.unwrap_or_default(),
            clock: self.clock.unwrap_or_else(|| Arc::new(Utc::now) as Clock),
            config,
        })
    }
}
