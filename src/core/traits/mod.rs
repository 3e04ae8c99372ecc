//! Collaborator traits and the service error classifier

pub mod error_mapper;
pub mod signer;
pub mod transport;

pub use error_mapper::ErrorClassifier;
pub use signer::Signer;
pub use transport::{HttpResponseInfo, Transport, TransportFault};
