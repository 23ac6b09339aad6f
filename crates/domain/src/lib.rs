//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod billing;
mod billing_filter;
mod capabilities;
mod route;

pub use billing::{
    Member, MemberStatus, Payment, PaymentStatus, Plan, Provider, extended_validity_end,
    validate_recharge_amount,
};
pub use billing_filter::{DEFAULT_REPORT_RANGE_DAYS, MemberFilter, PaymentFilter, ReportFilter};
pub use capabilities::Capabilities;
pub use route::{
    ADMINISTRATOR_HOME_PATH, AppRoute, Destination, RouteClass, RouteRequirement, SIGN_IN_PATH,
    SUBSCRIBER_HOME_PATH,
};
