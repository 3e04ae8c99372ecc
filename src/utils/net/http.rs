//! JSON-over-HTTP transport
//!
//! Posts the signed envelope to the service endpoint with the operation,
//! service name and API version as query parameters, and decodes the JSON
//! response. The status line and `Server` header of the most recent
//! response are kept for diagnostics.

use crate::config::DispatchConfig;
use crate::core::marshal::Envelope;
use crate::core::traits::transport::{HttpResponseInfo, Transport, TransportFault};
use crate::core::types::errors::{DispatchError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use reqwest::header::SERVER;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Longest error body quoted in a fault message
const MAX_ERROR_BODY: usize = 512;

/// [`Transport`] implementation on a pooled `reqwest` client
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    service_name: String,
    service_version: String,
    last_response: Mutex<Option<HttpResponseInfo>>,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        service_name: impl Into<String>,
        service_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mturk-dispatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DispatchError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            endpoint,
            service_name,
            service_version,
        ))
    }

    /// Use an existing client, e.g. one shared across transports
    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        service_name: impl Into<String>,
        service_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            service_name: service_name.into(),
            service_version: service_version.into(),
            last_response: Mutex::new(None),
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Result<Self> {
        Self::new(
            &config.service_url,
            &config.service_name,
            &config.service_version,
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        envelope: &Envelope,
        operation: &str,
    ) -> std::result::Result<Option<Value>, TransportFault> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            TransportFault::NullTarget(format!("invalid endpoint {}: {}", self.endpoint, e))
        })?;

        debug!("POST {} Operation={}", url, operation);

        let response = self
            .client
            .post(url)
            .query(&[
                ("Service", self.service_name.as_str()),
                ("Operation", operation),
                ("Version", self.service_version.as_str()),
            ])
            .json(envelope)
            .send()
            .await
            .map_err(request_fault)?;

        let status = response.status();
        *self.last_response.lock() = Some(HttpResponseInfo {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            server: response
                .headers()
                .get(SERVER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
        });

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no reason").to_string()
            } else {
                body.chars().take(MAX_ERROR_BODY).collect()
            };
            return Err(TransportFault::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(request_fault)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| TransportFault::Io(format!("invalid JSON response: {}", e)))
    }

    fn last_response(&self) -> Option<HttpResponseInfo> {
        self.last_response.lock().clone()
    }
}

fn request_fault(error: reqwest::Error) -> TransportFault {
    if error.is_timeout() {
        TransportFault::Timeout(error.to_string())
    } else if error.is_builder() {
        TransportFault::NullTarget(error.to_string())
    } else {
        TransportFault::Io(error.to_string())
    }
}
