use async_trait::async_trait;
use chrono::NaiveDate;

use cableflow_core::AppResult;
use cableflow_domain::{Member, Payment, PaymentStatus, Plan, Provider};

/// Read and append access to the billing dataset.
#[async_trait]
pub trait BillingRepository: Send + Sync {
    /// Lists every member.
    async fn list_members(&self) -> AppResult<Vec<Member>>;

    /// Finds a member by identifier.
    async fn find_member(&self, member_id: &str) -> AppResult<Option<Member>>;

    /// Finds a member by email (case-insensitive).
    async fn find_member_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// Lists every payment.
    async fn list_payments(&self) -> AppResult<Vec<Payment>>;

    /// Lists the payments of one member.
    async fn list_payments_for_member(&self, member_id: &str) -> AppResult<Vec<Payment>>;

    /// Appends a payment and returns it with its assigned identifier.
    async fn record_payment(&self, payment: NewPayment) -> AppResult<Payment>;

    /// Lists the plan catalog.
    async fn list_plans(&self) -> AppResult<Vec<Plan>>;

    /// Lists carrier providers.
    async fn list_providers(&self) -> AppResult<Vec<Provider>>;
}

/// Payment to append; the repository assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
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

/// Confirmation returned by a recharge processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeConfirmation {
    /// Gateway transaction reference.
    pub transaction_id: String,
}

/// Port for charging a recharge.
#[async_trait]
pub trait RechargeProcessor: Send + Sync {
    /// Charges `amount` for `member`.
    async fn process(&self, member: &Member, amount: u64) -> AppResult<RechargeConfirmation>;
}
