//! Typed request and result records for representative operations
//!
//! These are plain data: every optional wire field is a [`Specified`] and
//! each request implements [`RequestItem`](crate::core::marshal::RequestItem)
//! so the dispatcher can marshal it without per-operation code.

pub mod account;
pub mod assignment;
pub mod hit;

pub use account::{GetAccountBalanceRequest, GetAccountBalanceResult};
pub use assignment::{
    ApproveAssignmentRequest, ApproveAssignmentResult, Assignment, AssignmentStatus,
    GetAssignmentsForHitRequest, GetAssignmentsForHitResult,
};
pub use hit::{
    Comparator, CreateHitRequest, GetHitRequest, Hit, QualificationRequirement,
    RegisterHitTypeRequest, RegisterHitTypeResult, SearchHitsRequest, SearchHitsResult,
    SearchHitsSortProperty,
};

use crate::core::marshal::Specified;
use serde::{Deserialize, Serialize};

/// A monetary amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    #[serde(default, skip_serializing_if = "Specified::is_unspecified")]
    pub amount: Specified<f64>,
    #[serde(default, skip_serializing_if = "Specified::is_unspecified")]
    pub currency_code: Specified<String>,
    /// Display form filled in by the service
    #[serde(default, skip_serializing_if = "Specified::is_unspecified")]
    pub formatted_price: Specified<String>,
}
crate::optional_fields!(Price {
    amount,
    currency_code,
    formatted_price
});

impl Price {
    pub fn usd(amount: f64) -> Self {
        Self {
            amount: Specified::new(amount),
            currency_code: Specified::new("USD".to_string()),
            formatted_price: Specified::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}
crate::zero_value_enum!(SortDirection);
