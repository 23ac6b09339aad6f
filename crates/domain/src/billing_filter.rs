use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::billing::{Member, MemberStatus, Payment, PaymentStatus};

/// Default report window in days.
pub const DEFAULT_REPORT_RANGE_DAYS: u32 = 30;

/// Member list predicates. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFilter {
    /// Case-insensitive substring over name, id and email.
    pub search: Option<String>,
    /// Exact status.
    pub status: Option<MemberStatus>,
    /// Exact provider name.
    pub provider: Option<String>,
}

impl MemberFilter {
    /// Returns whether the member satisfies every predicate.
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|search| {
            contains_ignore_case(&member.name, search)
                || contains_ignore_case(&member.id, search)
                || contains_ignore_case(&member.email, search)
        });
        let matches_status = self.status.is_none_or(|status| member.status == status);
        let matches_provider = self
            .provider
            .as_deref()
            .is_none_or(|provider| member.provider == provider);

        matches_search && matches_status && matches_provider
    }
}

/// Payment history predicates. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFilter {
    /// Case-insensitive substring over the transaction id.
    pub search: Option<String>,
    /// Exact status.
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    /// Returns whether the payment satisfies every predicate.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .is_none_or(|search| contains_ignore_case(&payment.transaction_id, search));
        let matches_status = self.status.is_none_or(|status| payment.status == status);

        matches_search && matches_status
    }
}

/// Revenue report window and provider restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFilter {
    /// Payments dated on or after `today - range_days` are included.
    pub range_days: u32,
    /// Exact provider name of the paying member.
    pub provider: Option<String>,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            range_days: DEFAULT_REPORT_RANGE_DAYS,
            provider: None,
        }
    }
}

impl ReportFilter {
    /// Returns the first date inside the window.
    #[must_use]
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.range_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns whether a payment made on `date` by a member of `provider`
    /// belongs in the report.
    #[must_use]
    pub fn includes(&self, date: NaiveDate, provider: &str, today: NaiveDate) -> bool {
        let matches_range = date >= self.window_start(today);
        let matches_provider = self
            .provider
            .as_deref()
            .is_none_or(|expected| expected == provider);

        matches_range && matches_provider
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    fn member() -> Member {
        Member {
            id: "MEM003".to_owned(),
            name: "Robert Johnson".to_owned(),
            email: "robert@example.com".to_owned(),
            plan: "Sports Package".to_owned(),
            status: MemberStatus::Active,
            provider: "CableTech".to_owned(),
            next_recharge_date: date(2026, 5, 8),
            allotter: "Regional Cable Networks".to_owned(),
            validity_start: date(2026, 4, 8),
            validity_end: date(2026, 5, 8),
        }
    }

    #[test]
    fn empty_member_filter_matches_everything() {
        assert!(MemberFilter::default().matches(&member()));
        let blank = MemberFilter {
            search: Some(String::new()),
            ..MemberFilter::default()
        };
        assert!(blank.matches(&member()));
    }

    #[test]
    fn member_search_covers_name_id_and_email() {
        for search in ["johnson", "mem003", "ROBERT@"] {
            let filter = MemberFilter {
                search: Some(search.to_owned()),
                ..MemberFilter::default()
            };
            assert!(filter.matches(&member()), "search '{search}' should match");
        }

        let filter = MemberFilter {
            search: Some("emily".to_owned()),
            ..MemberFilter::default()
        };
        assert!(!filter.matches(&member()));
    }

    #[test]
    fn member_predicates_are_combined() {
        let filter = MemberFilter {
            search: Some("robert".to_owned()),
            status: Some(MemberStatus::Active),
            provider: Some("TeleStream".to_owned()),
        };
        assert!(!filter.matches(&member()));

        let filter = MemberFilter {
            provider: Some("CableTech".to_owned()),
            ..filter
        };
        assert!(filter.matches(&member()));
    }

    #[test]
    fn payment_filter_searches_transaction_ids() {
        let payment = Payment {
            id: "PAY007".to_owned(),
            member_id: "MEM002".to_owned(),
            amount: 299,
            date: date(2026, 4, 20),
            status: PaymentStatus::Failed,
            transaction_id: "TRX45678123".to_owned(),
        };

        let filter = PaymentFilter {
            search: Some("trx4567".to_owned()),
            status: Some(PaymentStatus::Failed),
        };
        assert!(filter.matches(&payment));

        let filter = PaymentFilter {
            status: Some(PaymentStatus::Successful),
            ..filter
        };
        assert!(!filter.matches(&payment));
    }

    #[test]
    fn report_window_is_inclusive() {
        let today = date(2026, 4, 30);
        let filter = ReportFilter::default();

        assert_eq!(filter.window_start(today), date(2026, 3, 31));
        assert!(filter.includes(date(2026, 3, 31), "CableTech", today));
        assert!(!filter.includes(date(2026, 3, 30), "CableTech", today));
    }

    #[test]
    fn report_provider_restriction_applies() {
        let today = date(2026, 4, 30);
        let filter = ReportFilter {
            range_days: 90,
            provider: Some("SatelliteVision".to_owned()),
        };

        assert!(filter.includes(date(2026, 2, 1), "SatelliteVision", today));
        assert!(!filter.includes(date(2026, 2, 1), "CableTech", today));
    }
}
