//! Assignment operations

use super::SortDirection;
use crate::core::marshal::{Paging, RequestItem, Specified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}
crate::zero_value_enum!(AssignmentStatus);

/// A worker's submission for a work unit
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Assignment {
    pub assignment_id: String,
    pub worker_id: String,
    #[serde(rename = "HITId")]
    pub hit_id: String,
    pub assignment_status: AssignmentStatus,
    pub accept_time: Option<DateTime<Utc>>,
    pub submit_time: Option<DateTime<Utc>>,
    pub auto_approval_time: Option<DateTime<Utc>>,
    /// Answer form markup
    pub answer: String,
    pub requester_feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAssignmentsForHitRequest {
    #[serde(rename = "HITId")]
    pub hit_id: String,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub assignment_status: Specified<Vec<AssignmentStatus>>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub sort_direction: Specified<SortDirection>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub page_size: Specified<u32>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub page_number: Specified<u32>,
}
crate::optional_fields!(GetAssignmentsForHitRequest {
    assignment_status,
    sort_direction,
    page_size,
    page_number
});

impl GetAssignmentsForHitRequest {
    pub fn new(hit_id: impl Into<String>) -> Self {
        Self {
            hit_id: hit_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAssignmentsForHitResult {
    pub num_results: u32,
    pub page_number: u32,
    pub total_num_results: u32,
    #[serde(rename = "Assignment")]
    pub assignments: Vec<Assignment>,
}

impl RequestItem for GetAssignmentsForHitRequest {
    const TYPE_NAME: &'static str = "GetAssignmentsForHITRequest";
    type Output = GetAssignmentsForHitResult;

    fn paging(&mut self) -> Option<Paging<'_>> {
        Some(Paging::new(&mut self.page_size, &mut self.page_number))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproveAssignmentRequest {
    pub assignment_id: String,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub requester_feedback: Specified<String>,
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub override_rejection: Specified<bool>,
}
crate::optional_fields!(ApproveAssignmentRequest {
    requester_feedback,
    override_rejection
});

impl ApproveAssignmentRequest {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            ..Default::default()
        }
    }
}

/// Approval carries no payload beyond the per-item status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApproveAssignmentResult {}

impl RequestItem for ApproveAssignmentRequest {
    const TYPE_NAME: &'static str = "ApproveAssignmentRequest";
    type Output = ApproveAssignmentResult;
}
