//! Requester account operations

use super::Price;
use crate::core::marshal::{RequestItem, Specified};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountBalanceRequest {
    #[serde(skip_serializing_if = "Specified::is_unspecified")]
    pub response_group: Specified<Vec<String>>,
}
crate::optional_fields!(GetAccountBalanceRequest { response_group });

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccountBalanceResult {
    pub available_balance: Price,
    pub on_hold_balance: Option<Price>,
}

impl RequestItem for GetAccountBalanceRequest {
    const TYPE_NAME: &'static str = "GetAccountBalanceRequest";
    type Output = GetAccountBalanceResult;
}
