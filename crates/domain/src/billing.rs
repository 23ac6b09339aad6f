//! Subscription billing records.

use std::str::FromStr;

use cableflow_core::{AppError, AppResult};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Subscription is valid.
    Active,
    /// Subscription has lapsed.
    Inactive,
    /// Account awaits activation or first recharge.
    Pending,
}

impl MemberStatus {
    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(AppError::Validation(format!(
                "unknown member status '{value}'"
            ))),
        }
    }
}

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment settled.
    Successful,
    /// Payment was declined or errored.
    Failed,
    /// Payment has not settled yet.
    Pending,
}

impl PaymentStatus {
    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            _ => Err(AppError::Validation(format!(
                "unknown payment status '{value}'"
            ))),
        }
    }
}

/// Subscriber account managed from the administrative console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable member identifier, e.g. `MEM001`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email; also links a signed-in subscriber to this record.
    pub email: String,
    /// Name of the subscribed plan.
    pub plan: String,
    /// Account status.
    pub status: MemberStatus,
    /// Name of the carrying provider.
    pub provider: String,
    /// Date the next recharge is due.
    pub next_recharge_date: NaiveDate,
    /// Regional network that allotted the connection.
    pub allotter: String,
    /// First day of the current validity window.
    pub validity_start: NaiveDate,
    /// Last day of the current validity window.
    pub validity_end: NaiveDate,
}

/// Recorded payment for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Stable payment identifier, e.g. `PAY001`.
    pub id: String,
    /// Paying member.
    pub member_id: String,
    /// Amount in whole rupees.
    pub amount: u64,
    /// Settlement date.
    pub date: NaiveDate,
    /// Payment outcome.
    pub status: PaymentStatus,
    /// Gateway transaction reference.
    pub transaction_id: String,
}

/// Subscription plan offered to members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable plan identifier.
    pub id: String,
    /// Plan name, referenced by [`Member::plan`].
    pub name: String,
    /// Monthly price in whole rupees.
    pub price: u64,
    /// Number of channels included.
    pub channels: u32,
    /// Short marketing description.
    pub description: String,
    /// Highlighted in plan listings.
    pub popular: bool,
}

/// Carrier delivering the signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable provider identifier.
    pub id: String,
    /// Provider name, referenced by [`Member::provider`].
    pub name: String,
    /// Regions covered.
    pub coverage: Vec<String>,
}

/// Validates a recharge amount.
pub fn validate_recharge_amount(amount: u64) -> AppResult<()> {
    if amount == 0 {
        return Err(AppError::Validation(
            "recharge amount must be greater than zero".to_owned(),
        ));
    }

    Ok(())
}

/// Returns the validity end after a one-month recharge starting `today`.
#[must_use]
pub fn extended_validity_end(today: NaiveDate) -> NaiveDate {
    today.checked_add_months(Months::new(1)).unwrap_or(today)
}
