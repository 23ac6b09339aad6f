//! Application services and ports.

#![forbid(unsafe_code)]

mod access_gate;
mod billing_ports;
mod billing_service;
mod session_ports;
mod session_service;

pub use access_gate::{
    AccessDecision, AccessGate, AccessState, NavigationOutcome, access_state, evaluate_access,
    index_destination,
};
pub use billing_ports::{
    BillingRepository, NewPayment, RechargeConfirmation, RechargeProcessor,
};
pub use billing_service::{
    BillingService, DashboardOverview, FAILED_PAYMENTS_LIMIT, MemberCounts, MemberProfile,
    PaymentHistory, RECENT_PAYMENTS_LIMIT, RechargeReceipt, ReportEntry, RevenueReport,
    SubscriberOverview, UPCOMING_RECHARGES_LIMIT,
};
pub use session_ports::{CredentialVerifier, SESSION_STORAGE_KEY, SessionBlobStore, SessionSettings};
pub use session_service::SessionService;
