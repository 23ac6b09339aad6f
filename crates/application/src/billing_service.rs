//! Billing views and simulated recharges.
//!
//! Read models for both consoles: member search, member profiles, payment
//! history, revenue reports and dashboard summaries. All date-dependent views
//! take `today` explicitly.

mod recharge;
mod views;

use std::sync::Arc;

use cableflow_domain::{Member, Payment, Plan};
use serde::Serialize;

use crate::{BillingRepository, RechargeProcessor};

pub use recharge::RechargeReceipt;

/// Number of payments in "recent" lists.
pub const RECENT_PAYMENTS_LIMIT: usize = 5;

/// Number of upcoming recharges on the dashboard.
pub const UPCOMING_RECHARGES_LIMIT: usize = 5;

/// Number of failed payments surfaced as alerts.
pub const FAILED_PAYMENTS_LIMIT: usize = 3;

/// A member with their payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberProfile {
    /// The member record.
    pub member: Member,
    /// Payments, newest first.
    pub payments: Vec<Payment>,
}

/// Filtered payment history of one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentHistory {
    /// Matching payments, newest first.
    pub payments: Vec<Payment>,
    /// Sum of all successful payments, ignoring the filter.
    pub successful_total: u64,
}

/// One payment joined with the paying member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The payment.
    pub payment: Payment,
    /// Paying member name.
    pub member_name: String,
    /// Paying member plan.
    pub plan: String,
    /// Paying member provider.
    pub provider: String,
}

/// Revenue aggregated over a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueReport {
    /// Payments in the window, newest first.
    pub entries: Vec<ReportEntry>,
    /// Sum of successful amounts.
    pub total_amount: u64,
    /// Number of successful payments.
    pub successful_count: usize,
    /// Number of failed payments.
    pub failed_count: usize,
    /// Number of pending payments.
    pub pending_count: usize,
}

/// Member totals by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemberCounts {
    /// All members.
    pub total: usize,
    /// Active members.
    pub active: usize,
    /// Inactive members.
    pub inactive: usize,
    /// Pending members.
    pub pending: usize,
}

/// Administrative dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    /// Member totals.
    pub member_counts: MemberCounts,
    /// Sum of all successful payments.
    pub total_revenue: u64,
    /// Most recent payments.
    pub recent_payments: Vec<Payment>,
    /// Members whose next recharge is due after today, soonest first.
    pub upcoming_recharges: Vec<Member>,
    /// Failed payments needing attention.
    pub failed_payments: Vec<Payment>,
}

/// Subscriber console landing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriberOverview {
    /// The subscriber's member record.
    pub member: Member,
    /// Catalog entry of the subscribed plan, if it still exists.
    pub plan: Option<Plan>,
    /// Most recent payments.
    pub recent_payments: Vec<Payment>,
}

/// Application service for billing views.
#[derive(Clone)]
pub struct BillingService {
    repository: Arc<dyn BillingRepository>,
    recharge_processor: Arc<dyn RechargeProcessor>,
}

impl BillingService {
    /// Creates a new billing service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn BillingRepository>,
        recharge_processor: Arc<dyn RechargeProcessor>,
    ) -> Self {
        Self {
            repository,
            recharge_processor,
        }
    }
}

fn sort_newest_first(payments: &mut [Payment]) {
    payments.sort_by(|left, right| right.date.cmp(&left.date));
}
