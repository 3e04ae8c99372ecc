//! Service-reported error records

use serde::{Deserialize, Serialize};
use std::fmt;

/// One key/value pair attached to an error record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorData {
    pub key: String,
    pub value: String,
}

/// A structured error returned by the remote service for one call or one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorRecord {
    /// Service error code, e.g. `AWS.MechanicalTurk.HITDoesNotExist`
    pub code: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Auxiliary diagnostic data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ErrorData>,
}

impl ErrorRecord {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Vec::new(),
        }
    }

    /// Attach a data pair
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push(ErrorData {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.data.is_empty() {
            let pairs: Vec<String> = self
                .data
                .iter()
                .map(|d| format!("{}={}", d.key, d.value))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        Ok(())
    }
}

/// Payload of every classified service error: a summary plus the full record list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFault {
    pub message: String,
    pub errors: Vec<ErrorRecord>,
}

impl ServiceFault {
    /// Build a fault whose message lists every record
    pub fn from_records(errors: Vec<ErrorRecord>) -> Self {
        let message = format_records(&errors);
        Self { message, errors }
    }

    /// Fault with no service records, e.g. a transport-level failure
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Codes of the carried records, in service order
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_str()).collect()
    }
}

impl fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Render records as `code: message (k=v)` joined with `; `
pub fn format_records(errors: &[ErrorRecord]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
