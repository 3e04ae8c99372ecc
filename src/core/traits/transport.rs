//! Wire transport abstraction
//!
//! The dispatcher never talks to the network directly. It hands a signed
//! [`Envelope`] and the operation name to a [`Transport`] and gets back an
//! opaque JSON response, or a [`TransportFault`] describing why the call failed.

use crate::core::marshal::Envelope;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Why a transport call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFault {
    /// The request timed out before a response arrived
    Timeout(String),
    /// The service answered with a non-success HTTP status
    HttpStatus { status: u16, message: String },
    /// The request had no usable target; usually a malformed endpoint URL
    NullTarget(String),
    /// Any other I/O or protocol fault
    Io(String),
}

impl TransportFault {
    /// Timeouts and HTTP 500/503 are the service's throttling signals
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::HttpStatus { status, .. } => matches!(status, 500 | 503),
            _ => false,
        }
    }
}

impl fmt::Display for TransportFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(msg) => write!(f, "timeout: {}", msg),
            Self::HttpStatus { status, message } => write!(f, "HTTP {}: {}", status, message),
            Self::NullTarget(msg) => write!(f, "no target: {}", msg),
            Self::Io(msg) => write!(f, "I/O: {}", msg),
        }
    }
}

impl std::error::Error for TransportFault {}

/// Raw details of the most recent HTTP response, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponseInfo {
    pub status: u16,
    pub status_text: String,
    pub server: Option<String>,
}

impl fmt::Display for HttpResponseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.status_text)?;
        if let Some(server) = &self.server {
            write!(f, " (server: {})", server)?;
        }
        Ok(())
    }
}

/// Sends one signed envelope to the service
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `envelope` as `operation`
    ///
    /// `Ok(None)` means the call completed but produced no response body.
    async fn send(
        &self,
        envelope: &Envelope,
        operation: &str,
    ) -> std::result::Result<Option<Value>, TransportFault>;

    /// The last raw HTTP response seen, if any
    fn last_response(&self) -> Option<HttpResponseInfo>;
}
