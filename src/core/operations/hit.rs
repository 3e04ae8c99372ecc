//! Work unit (HIT) operations

use super::{Price, SortDirection};
use crate::core::marshal::{Paging, RequestItem, Specified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work unit as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Hit {
    #[serde(rename = "HITId")]
    pub hit_id: String,
    #[serde(rename = "HITTypeId")]
    pub hit_type_id: String,
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    #[serde(rename = "HITStatus")]
    pub hit_status: Option<String>,
    pub reward: Option<Price>,
    pub max_assignments: Option<i32>,
    pub creation_time: Option<DateTime<Utc>>,
    pub expiration: Option<DateTime<Utc>>,
    pub requester_annotation: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[default]
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    EqualTo,
    NotEqualTo,
    Exists,
}
crate::zero_value_enum!(Comparator);

/// A qualification a worker must hold
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QualificationRequirement {
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub qualification_type_id: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub comparator: Specified<Comparator>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub integer_value: Specified<Vec<i32>>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub required_to_preview: Specified<bool>,
}
crate::optional_fields!(QualificationRequirement {
    qualification_type_id,
    comparator,
    integer_value,
    required_to_preview
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHitRequest {
    #[serde(rename = "HITTypeId", skip_serializing_if = "Specified::is_unspecified")]
    pub hit_type_id: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub title: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub description: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub keywords: Specified<String>,
    /// Question form markup
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub question: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub reward: Specified<Price>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub assignment_duration_in_seconds: Specified<i64>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub lifetime_in_seconds: Specified<i64>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub auto_approval_delay_in_seconds: Specified<i64>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub max_assignments: Specified<i32>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub qualification_requirement: Specified<Vec<QualificationRequirement>>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub requester_annotation: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub unique_request_token: Specified<String>,
}
crate::optional_fields!(CreateHitRequest {
    hit_type_id,
    title,
    description,
    keywords,
    question,
    reward,
    assignment_duration_in_seconds,
    lifetime_in_seconds,
    auto_approval_delay_in_seconds,
    max_assignments,
    qualification_requirement,
    requester_annotation,
    unique_request_token
});

impl RequestItem for CreateHitRequest {
    const TYPE_NAME: &'static str = "CreateHITRequest";
    type Output = Hit;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHitRequest {
    #[serde(rename = "HITId")]
    pub hit_id: String,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub response_group: Specified<Vec<String>>,
}
crate::optional_fields!(GetHitRequest { response_group });

impl GetHitRequest {
    pub fn new(hit_id: impl Into<String>) -> Self {
        Self {
            hit_id: hit_id.into(),
            ..Default::default()
        }
    }
}

impl RequestItem for GetHitRequest {
    const TYPE_NAME: &'static str = "GetHITRequest";
    type Output = Hit;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchHitsSortProperty {
    #[default]
    Title,
    Reward,
    Expiration,
    CreationTime,
    Enumeration,
}
crate::zero_value_enum!(SearchHitsSortProperty);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchHitsRequest {
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub sort_property: Specified<SearchHitsSortProperty>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub sort_direction: Specified<SortDirection>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub page_size: Specified<u32>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub page_number: Specified<u32>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub response_group: Specified<Vec<String>>,
}
crate::optional_fields!(SearchHitsRequest {
    sort_property,
    sort_direction,
    page_size,
    page_number,
    response_group
});

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchHitsResult {
    pub num_results: u32,
    pub page_number: u32,
    pub total_num_results: u32,
    #[serde(rename = "HIT")]
    pub hits: Vec<Hit>,
}

impl RequestItem for SearchHitsRequest {
    const TYPE_NAME: &'static str = "SearchHITsRequest";
    type Output = SearchHitsResult;

    fn paging(&mut self) -> Option<Paging<'_>> {
        Some(Paging::new(&mut self.page_size, &mut self.page_number))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterHitTypeRequest {
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub title: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub description: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub reward: Specified<Price>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub assignment_duration_in_seconds: Specified<i64>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub keywords: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub auto_approval_delay_in_seconds: Specified<i64>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub qualification_requirement: Specified<Vec<QualificationRequirement>>,
}
crate::optional_fields!(RegisterHitTypeRequest {
    title,
    description,
    reward,
    assignment_duration_in_seconds,
    keywords,
    auto_approval_delay_in_seconds,
    qualification_requirement
});

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegisterHitTypeResult {
    #[serde(rename = "HITTypeId")]
    pub hit_type_id: String,
}

impl RequestItem for RegisterHitTypeRequest {
    const TYPE_NAME: &'static str = "RegisterHITTypeRequest";
    type Output = RegisterHitTypeResult;
}
