//! Operation naming registry
//!
//! Maps a request item type to its operation, envelope and result field
//! names. Names follow the wire convention (`<Op>Request` items,
//! `<Op>Response` responses, `<Op>Result` result fields) except where the
//! explicit result-field table says otherwise.

use super::RequestItem;
use crate::core::types::errors::{DispatchError, Result};
use std::collections::HashMap;

pub const REQUEST_SUFFIX: &str = "Request";
pub const RESPONSE_SUFFIX: &str = "Response";
pub const RESULT_SUFFIX: &str = "Result";

/// Response types whose result field does not follow the naming convention
const STANDARD_RESULT_FIELDS: &[(&str, &str)] = &[
    ("CreateHITResponse", "HIT"),
    ("GetHITResponse", "HIT"),
    ("CreateQualificationTypeResponse", "QualificationType"),
    ("GetQualificationTypeResponse", "QualificationType"),
    ("UpdateQualificationTypeResponse", "QualificationType"),
    ("GetQualificationScoreResponse", "Qualification"),
];

/// Resolved names for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSchema {
    /// Operation name sent on the wire, e.g. `CreateHIT`
    pub operation: String,
    /// Item type name, e.g. `CreateHITRequest`
    pub request_type: String,
    /// Response type name, e.g. `CreateHITResponse`
    pub response_type: String,
    /// Result field from the explicit table, tried first
    pub mapped_result_field: Option<String>,
    /// Result field by convention, e.g. `CreateHITResult`
    pub conventional_result_field: String,
}

impl OperationSchema {
    /// Result field names in lookup order
    pub fn result_fields(&self) -> impl Iterator<Item = &str> {
        self.mapped_result_field
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.conventional_result_field.as_str()))
    }
}

/// Registry of result-field overrides and pre-resolved schemas
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    result_fields: HashMap<String, String>,
    schemas: HashMap<String, OperationSchema>,
}

impl OperationRegistry {
    /// Empty registry: naming convention only
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry carrying the standard result-field table
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (response_type, field) in STANDARD_RESULT_FIELDS {
            registry.map_result_field(*response_type, *field);
        }
        registry
    }

    /// Override the result field for a response type
    pub fn map_result_field(&mut self, response_type: impl Into<String>, field: impl Into<String>) {
        self.result_fields.insert(response_type.into(), field.into());
    }

    /// Resolve and cache the schema for `I`
    pub fn register<I: RequestItem>(&mut self) -> Result<&OperationSchema> {
        let schema = self.resolve(I::TYPE_NAME)?;
        let schema = self
            .schemas
            .entry(I::TYPE_NAME.to_string())
            .or_insert(schema);
        Ok(&*schema)
    }

    /// Schema for `I`, from the cache or resolved by convention
    pub fn schema_for<I: RequestItem>(&self) -> Result<OperationSchema> {
        match self.schemas.get(I::TYPE_NAME) {
            Some(schema) => Ok(schema.clone()),
            None => self.resolve(I::TYPE_NAME),
        }
    }

    /// Resolve names for a request item type name
    ///
    /// Fails with `UnsupportedShape` if the name does not end in `Request`.
    pub fn resolve(&self, request_type: &str) -> Result<OperationSchema> {
        let operation = request_type
            .strip_suffix(REQUEST_SUFFIX)
            .filter(|op| !op.is_empty())
            .ok_or_else(|| {
                DispatchError::unsupported_shape(format!(
                    "Type {} cannot be mapped to an operation envelope",
                    request_type
                ))
            })?;

        let response_type = format!("{}{}", operation, RESPONSE_SUFFIX);
        Ok(OperationSchema {
            operation: operation.to_string(),
            request_type: request_type.to_string(),
            mapped_result_field: self.result_fields.get(&response_type).cloned(),
            conventional_result_field: format!("{}{}", operation, RESULT_SUFFIX),
            response_type,
        })
    }

    /// Number of pre-resolved schemas
    pub fn registered(&self) -> usize {
        self.schemas.len()
    }
}
