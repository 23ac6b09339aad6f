//! Sample billing dataset for local development.
//!
//! Dates are relative to `today` so dashboards always show upcoming and
//! recent activity.

use cableflow_domain::{Member, MemberStatus, Payment, PaymentStatus, Plan, Provider};
use cableflow_infrastructure::InMemoryBillingRepository;
use chrono::{NaiveDate, TimeDelta};
use tracing::info;

/// (id, name, email, plan, status, provider, allotter, days until validity end)
type SeedMember = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    MemberStatus,
    &'static str,
    &'static str,
    i64,
);

const SEED_MEMBERS: [SeedMember; 5] = [
    (
        "MEM001",
        "John Doe",
        "john@example.com",
        "Premium HD",
        MemberStatus::Active,
        "CableTech",
        "Regional Cable Networks",
        15,
    ),
    (
        "MEM002",
        "Jane Smith",
        "jane@example.com",
        "Basic",
        MemberStatus::Inactive,
        "SatelliteVision",
        "City Satellite Services",
        -5,
    ),
    (
        "MEM003",
        "Robert Johnson",
        "robert@example.com",
        "Sports Package",
        MemberStatus::Active,
        "CableTech",
        "Regional Cable Networks",
        7,
    ),
    (
        "MEM004",
        "Emily Williams",
        "emily@example.com",
        "Movies Pack",
        MemberStatus::Active,
        "TeleStream",
        "Metro Cable Company",
        20,
    ),
    (
        "MEM005",
        "Michael Brown",
        "michael@example.com",
        "4K Ultra HD",
        MemberStatus::Pending,
        "SatelliteVision",
        "City Satellite Services",
        2,
    ),
];

/// (id, member id, amount, days ago, status, transaction id)
type SeedPayment = (
    &'static str,
    &'static str,
    u64,
    i64,
    PaymentStatus,
    &'static str,
);

const SEED_PAYMENTS: [SeedPayment; 8] = [
    ("PAY001", "MEM001", 499, 15, PaymentStatus::Successful, "TRX78945612"),
    ("PAY002", "MEM002", 299, 35, PaymentStatus::Successful, "TRX45678912"),
    ("PAY003", "MEM003", 599, 23, PaymentStatus::Successful, "TRX12345678"),
    ("PAY004", "MEM004", 399, 10, PaymentStatus::Successful, "TRX98765432"),
    ("PAY005", "MEM005", 799, 28, PaymentStatus::Successful, "TRX65432198"),
    ("PAY006", "MEM001", 499, 45, PaymentStatus::Successful, "TRX12398745"),
    ("PAY007", "MEM002", 299, 3, PaymentStatus::Failed, "TRX45678123"),
    ("PAY008", "MEM003", 599, 53, PaymentStatus::Successful, "TRX87456321"),
];

/// (id, name, price, channels, description, popular)
const SEED_PLANS: [(&str, &str, u64, u32, &str, bool); 5] = [
    ("PLAN001", "Basic", 299, 100, "Essential channels for everyday viewing", false),
    ("PLAN002", "Premium HD", 499, 200, "HD channels with premium content", true),
    (
        "PLAN003",
        "Sports Package",
        599,
        220,
        "All sports channels including premium sports networks",
        false,
    ),
    ("PLAN004", "Movies Pack", 399, 150, "Movie channels from around the world", false),
    (
        "PLAN005",
        "4K Ultra HD",
        799,
        250,
        "Ultra HD content with premium movie and sports channels",
        false,
    ),
];

const SEED_PROVIDERS: [(&str, &str, &[&str]); 3] = [
    ("PROV001", "CableTech", &["Northeast", "Midwest"]),
    ("PROV002", "SatelliteVision", &["Nationwide"]),
    ("PROV003", "TeleStream", &["West", "Southwest"]),
];

/// Builds the seeded in-memory billing repository.
pub fn billing_repository(today: NaiveDate) -> InMemoryBillingRepository {
    let members = seed_members(today);
    let payments = seed_payments(today);

    info!(
        members = members.len(),
        payments = payments.len(),
        "seeded development billing data"
    );

    InMemoryBillingRepository::new(members, payments, seed_plans(), seed_providers())
}

fn seed_members(today: NaiveDate) -> Vec<Member> {
    SEED_MEMBERS
        .iter()
        .map(
            |&(id, name, email, plan, status, provider, allotter, days_left)| {
                let validity_end = shifted(today, days_left);
                Member {
                    id: id.to_owned(),
                    name: name.to_owned(),
                    email: email.to_owned(),
                    plan: plan.to_owned(),
                    status,
                    provider: provider.to_owned(),
                    next_recharge_date: validity_end,
                    allotter: allotter.to_owned(),
                    validity_start: shifted(validity_end, -30),
                    validity_end,
                }
            },
        )
        .collect()
}

fn seed_payments(today: NaiveDate) -> Vec<Payment> {
    SEED_PAYMENTS
        .iter()
        .map(
            |&(id, member_id, amount, days_ago, status, transaction_id)| Payment {
                id: id.to_owned(),
                member_id: member_id.to_owned(),
                amount,
                date: shifted(today, -days_ago),
                status,
                transaction_id: transaction_id.to_owned(),
            },
        )
        .collect()
}

fn seed_plans() -> Vec<Plan> {
    SEED_PLANS
        .iter()
        .map(|&(id, name, price, channels, description, popular)| Plan {
            id: id.to_owned(),
            name: name.to_owned(),
            price,
            channels,
            description: description.to_owned(),
            popular,
        })
        .collect()
}

fn seed_providers() -> Vec<Provider> {
    SEED_PROVIDERS
        .iter()
        .map(|&(id, name, coverage)| Provider {
            id: id.to_owned(),
            name: name.to_owned(),
            coverage: coverage.iter().map(|region| (*region).to_owned()).collect(),
        })
        .collect()
}

fn shifted(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days))
        .unwrap_or(date)
}
