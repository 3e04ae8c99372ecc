//! Request envelope and response unwrapping

use super::RequestItem;
use super::registry::OperationSchema;
use crate::core::types::errors::{DispatchError, ErrorRecord, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Wrapper carrying same-type request items plus shared call metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Envelope type name, e.g. `CreateHIT`
    #[serde(skip)]
    name: String,
    #[serde(rename = "AWSAccessKeyId")]
    pub credential_id: String,
    #[serde(rename = "Timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "Signature", skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(rename = "Request")]
    pub request: Vec<Value>,
}

impl Envelope {
    /// Wrap a single item as a one-element envelope
    pub fn wrap_one<I: RequestItem>(schema: &OperationSchema, item: &I) -> Result<Self> {
        Self::wrap(schema, std::slice::from_ref(item))
    }

    /// Wrap a homogeneous list of items
    ///
    /// Fails with `UnsupportedShape` for an empty list, for items whose type
    /// does not belong to `schema`, or for items that do not serialise to an
    /// object.
    pub fn wrap<I: RequestItem>(schema: &OperationSchema, items: &[I]) -> Result<Self> {
        if schema.request_type != I::TYPE_NAME {
            return Err(DispatchError::unsupported_shape(format!(
                "{} items cannot be wrapped in a {} envelope",
                I::TYPE_NAME,
                schema.operation
            )));
        }
        if items.is_empty() {
            return Err(DispatchError::unsupported_shape(format!(
                "Empty {} batch",
                schema.operation
            )));
        }

        let request = items
            .iter()
            .map(|item| match serde_json::to_value(item) {
                Ok(value @ Value::Object(_)) => Ok(value),
                Ok(other) => Err(DispatchError::unsupported_shape(format!(
                    "{} serialised to a non-object value: {}",
                    I::TYPE_NAME,
                    other
                ))),
                Err(e) => Err(DispatchError::unsupported_shape(format!(
                    "{} could not be serialised: {}",
                    I::TYPE_NAME,
                    e
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: schema.operation.clone(),
            credential_id: String::new(),
            timestamp: None,
            signature: None,
            request,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach credential id, timestamp and signature, replacing earlier ones
    pub fn sign(&mut self, credential_id: &str, timestamp: String, signature: String) {
        self.credential_id = credential_id.to_string();
        self.timestamp = Some(timestamp);
        self.signature = Some(signature);
    }

    pub fn len(&self) -> usize {
        self.request.len()
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty()
    }
}

/// Extract the result items from a response
///
/// Tries the mapped result field first, then the conventional one. A single
/// object counts as one item and `null` as none. Fails with
/// `ServiceContract` when neither field is present, which means client and
/// service disagree on the response shape.
pub fn unwrap(schema: &OperationSchema, response: &Value) -> Result<Vec<Value>> {
    let object = response.as_object().ok_or_else(|| {
        DispatchError::service_contract(format!(
            "{} is not an object: {}",
            schema.response_type, response
        ))
    })?;

    let field = schema
        .result_fields()
        .find(|field| object.contains_key(*field))
        .ok_or_else(|| {
            DispatchError::service_contract(format!(
                "{} carries no result field (looked for {}); client and service versions may differ",
                schema.response_type,
                schema.result_fields().collect::<Vec<_>>().join(", ")
            ))
        })?;

    Ok(match &object[field] {
        Value::Array(items) => items.clone(),
        Value::Null => Vec::new(),
        other => vec![other.clone()],
    })
}

/// Envelope-level error records: `OperationRequest.Errors`
pub fn response_errors(response: &Value) -> Vec<ErrorRecord> {
    response
        .get("OperationRequest")
        .and_then(|request| request.get("Errors"))
        .map(parse_error_list)
        .unwrap_or_default()
}

/// Item-level error records: `Request.Errors` on one result item
pub fn item_errors(item: &Value) -> Vec<ErrorRecord> {
    item.get("Request")
        .and_then(|request| request.get("Errors"))
        .map(parse_error_list)
        .unwrap_or_default()
}

/// Accepts `[..]`, `{"Error": [..]}` and `{"Error": {..}}`
fn parse_error_list(errors: &Value) -> Vec<ErrorRecord> {
    let list = match errors {
        Value::Object(map) if map.contains_key("Error") => &map["Error"],
        other => other,
    };

    let entries: Vec<&Value> = match list {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        single => vec![single],
    };

    entries
        .into_iter()
        .filter_map(|entry| match ErrorRecord::deserialize(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed error record {}: {}", entry, e);
                None
            }
        })
        .collect()
}

/// Decode unwrapped items into the operation's output type
pub fn decode_items<T: DeserializeOwned>(
    schema: &OperationSchema,
    items: Vec<Value>,
) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| {
                DispatchError::service_contract(format!(
                    "{} result item could not be decoded: {}",
                    schema.response_type, e
                ))
            })
        })
        .collect()
}
