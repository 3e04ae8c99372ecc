//! HMAC request signing

use crate::config::DispatchConfig;
use crate::core::traits::signer::Signer;
use crate::core::types::errors::{DispatchError, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac, digest::KeyInit as HmacKeyInit};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Digest used for request signatures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureAlgorithm {
    #[default]
    HmacSha1,
    HmacSha256,
}

/// Signs `service + operation + timestamp` with the secret key, base64 encoded
#[derive(Clone)]
pub struct HmacSigner {
    service_name: String,
    secret: String,
    algorithm: SignatureAlgorithm,
}

impl HmacSigner {
    pub fn new(service_name: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(DispatchError::config(
                "A secret access key is required for HMAC signing",
            ));
        }
        Ok(Self {
            service_name: service_name.into(),
            secret,
            algorithm: SignatureAlgorithm::default(),
        })
    }

    pub fn from_config(config: &DispatchConfig) -> Result<Self> {
        Self::new(&config.service_name, &config.secret_access_key)
    }

    pub fn with_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// The exact bytes covered by the signature
    pub fn string_to_sign(&self, operation: &str, timestamp: &str) -> String {
        format!("{}{}{}", self.service_name, operation, timestamp)
    }
}

impl Signer for HmacSigner {
    fn sign(&self, operation: &str, timestamp: &str) -> Result<String> {
        let data = self.string_to_sign(operation, timestamp);
        let digest = match self.algorithm {
            SignatureAlgorithm::HmacSha1 => compute::<HmacSha1>(&self.secret, &data)?,
            SignatureAlgorithm::HmacSha256 => compute::<HmacSha256>(&self.secret, &data)?,
        };
        Ok(STANDARD.encode(digest))
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("service_name", &self.service_name)
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

fn compute<M: Mac + HmacKeyInit>(secret: &str, data: &str) -> Result<Vec<u8>> {
    let mut mac = <M as HmacKeyInit>::new_from_slice(secret.as_bytes())
        .map_err(|e| DispatchError::signing(format!("Invalid HMAC key: {}", e)))?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
