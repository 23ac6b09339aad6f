use serde::Deserialize;
use ts_rs::TS;

/// Incoming payload for a recharge.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/recharge-request.ts"
)]
pub struct RechargeRequest {
    /// Amount in whole rupees.
    pub amount: u64,
}

/// Search query of the recharge candidate list.
#[derive(Debug, Default, Deserialize)]
pub struct RechargeSearchQuery {
    pub search: Option<String>,
}
