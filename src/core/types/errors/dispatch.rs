//! Error taxonomy raised by the dispatch layer

use super::record::ServiceFault;
use crate::core::traits::transport::TransportFault;
use thiserror::Error;

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Classified error kind, used by the classifier rule table and for branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Auth,
    NoWorkAvailable,
    ObjectNotFound,
    InvalidState,
    AlreadyExists,
    PermissionDenied,
    RetryNotElapsed,
    Parse,
    InvalidEndpoint,
    InvalidParameter,
    LimitExceeded,
    InsufficientFunds,
    LayoutNotFound,
    Service,
    ServiceContract,
    UnsupportedShape,
    NoResponse,
    Transport,
    Config,
    LimiterDisposed,
    Signing,
}

/// Main error type for a dispatched call
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Credentials rejected or missing
    #[error("Authentication error: {0}")]
    Auth(ServiceFault),

    /// No work units left to hand out
    #[error("No work available: {0}")]
    NoWorkAvailable(ServiceFault),

    #[error("Object not found: {0}")]
    ObjectNotFound(ServiceFault),

    /// Object exists but its state forbids the operation
    #[error("Invalid state: {0}")]
    InvalidState(ServiceFault),

    #[error("Already exists: {0}")]
    AlreadyExists(ServiceFault),

    #[error("Permission denied: {0}")]
    PermissionDenied(ServiceFault),

    /// A retry delay imposed by the service has not elapsed yet
    #[error("Retry delay not elapsed: {0}")]
    RetryNotElapsed(ServiceFault),

    /// The service could not parse submitted markup
    #[error("Parse error: {0}")]
    Parse(ServiceFault),

    /// Endpoint rejected by the service or malformed on the client
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(ServiceFault),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(ServiceFault),

    #[error("Limit exceeded: {0}")]
    LimitExceeded(ServiceFault),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(ServiceFault),

    #[error("Layout not found: {0}")]
    LayoutNotFound(ServiceFault),

    /// Catch-all for unclassified service errors and exhausted retries
    #[error("Service error: {0}")]
    Service(ServiceFault),

    /// Response did not carry the expected result field
    #[error("Service contract error: {0}")]
    ServiceContract(String),

    /// Request shape cannot be mapped to an envelope
    #[error("Unsupported request shape: {0}")]
    UnsupportedShape(String),

    /// Transport produced nothing and there is no HTTP response to diagnose
    #[error("No response: {0}")]
    NoResponse(String),

    /// Non-retryable transport fault
    #[error("Transport error: {0}")]
    Transport(TransportFault),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The rate limiter was disposed while the caller waited on it
    #[error("Rate limiter disposed: {0}")]
    LimiterDisposed(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl DispatchError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service(ServiceFault::message(message))
    }

    pub fn service_contract<S: Into<String>>(message: S) -> Self {
        Self::ServiceContract(message.into())
    }

    pub fn unsupported_shape<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedShape(message.into())
    }

    pub fn signing<S: Into<String>>(message: S) -> Self {
        Self::Signing(message.into())
    }

    /// Build the classified error for `kind` carrying `fault`
    ///
    /// Kinds without a fault payload fall back to [`DispatchError::Service`].
    pub fn classified(kind: ErrorKind, fault: ServiceFault) -> Self {
        match kind {
            ErrorKind::Auth => Self::Auth(fault),
            ErrorKind::NoWorkAvailable => Self::NoWorkAvailable(fault),
            ErrorKind::ObjectNotFound => Self::ObjectNotFound(fault),
            ErrorKind::InvalidState => Self::InvalidState(fault),
            ErrorKind::AlreadyExists => Self::AlreadyExists(fault),
            ErrorKind::PermissionDenied => Self::PermissionDenied(fault),
            ErrorKind::RetryNotElapsed => Self::RetryNotElapsed(fault),
            ErrorKind::Parse => Self::Parse(fault),
            ErrorKind::InvalidEndpoint => Self::InvalidEndpoint(fault),
            ErrorKind::InvalidParameter => Self::InvalidParameter(fault),
            ErrorKind::LimitExceeded => Self::LimitExceeded(fault),
            ErrorKind::InsufficientFunds => Self::InsufficientFunds(fault),
            ErrorKind::LayoutNotFound => Self::LayoutNotFound(fault),
            _ => Self::Service(fault),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::Auth,
            Self::NoWorkAvailable(_) => ErrorKind::NoWorkAvailable,
            Self::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::RetryNotElapsed(_) => ErrorKind::RetryNotElapsed,
            Self::Parse(_) => ErrorKind::Parse,
            Self::InvalidEndpoint(_) => ErrorKind::InvalidEndpoint,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::InsufficientFunds(_) => ErrorKind::InsufficientFunds,
            Self::LayoutNotFound(_) => ErrorKind::LayoutNotFound,
            Self::Service(_) => ErrorKind::Service,
            Self::ServiceContract(_) => ErrorKind::ServiceContract,
            Self::UnsupportedShape(_) => ErrorKind::UnsupportedShape,
            Self::NoResponse(_) => ErrorKind::NoResponse,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Config(_) => ErrorKind::Config,
            Self::LimiterDisposed(_) => ErrorKind::LimiterDisposed,
            Self::Signing(_) => ErrorKind::Signing,
        }
    }

    /// Service fault payload for classified kinds
    pub fn fault(&self) -> Option<&ServiceFault> {
        match self {
            Self::Auth(f)
            | Self::NoWorkAvailable(f)
            | Self::ObjectNotFound(f)
            | Self::InvalidState(f)
            | Self::AlreadyExists(f)
            | Self::PermissionDenied(f)
            | Self::RetryNotElapsed(f)
            | Self::Parse(f)
            | Self::InvalidEndpoint(f)
            | Self::InvalidParameter(f)
            | Self::LimitExceeded(f)
            | Self::InsufficientFunds(f)
            | Self::LayoutNotFound(f)
            | Self::Service(f) => Some(f),
            _ => None,
        }
    }

    /// Only transient transport faults are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(fault) if fault.is_transient())
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
