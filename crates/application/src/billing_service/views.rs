use std::collections::HashMap;

use cableflow_core::{AppError, AppResult};
use cableflow_domain::{
    Member, MemberFilter, MemberStatus, Payment, PaymentFilter, PaymentStatus, Plan, Provider,
    ReportFilter,
};
use chrono::NaiveDate;

use super::*;

impl BillingService {
    /// Lists members matching every predicate of the filter.
    pub async fn search_members(&self, filter: &MemberFilter) -> AppResult<Vec<Member>> {
        let members = self.repository.list_members().await?;
        Ok(members
            .into_iter()
            .filter(|member| filter.matches(member))
            .collect())
    }

    /// Lists members eligible for an administrative recharge, searched by
    /// name or id.
    pub async fn recharge_candidates(&self, search: Option<&str>) -> AppResult<Vec<Member>> {
        let search = search.map(str::to_lowercase).unwrap_or_default();
        let members = self.repository.list_members().await?;

        Ok(members
            .into_iter()
            .filter(|member| {
                member.name.to_lowercase().contains(&search)
                    || member.id.to_lowercase().contains(&search)
            })
            .collect())
    }

    /// Returns a member with their payments.
    pub async fn member_profile(&self, member_id: &str) -> AppResult<MemberProfile> {
        let member = self.require_member(member_id).await?;
        let mut payments = self.repository.list_payments_for_member(member_id).await?;
        sort_newest_first(&mut payments);

        Ok(MemberProfile { member, payments })
    }

    /// Returns the filtered payment history of a member.
    pub async fn payment_history(
        &self,
        member_id: &str,
        filter: &PaymentFilter,
    ) -> AppResult<PaymentHistory> {
        let mut payments = self.repository.list_payments_for_member(member_id).await?;
        sort_newest_first(&mut payments);

        let successful_total = successful_total(&payments);
        payments.retain(|payment| filter.matches(payment));

        Ok(PaymentHistory {
            payments,
            successful_total,
        })
    }

    /// Aggregates payments inside the report window.
    pub async fn revenue_report(
        &self,
        filter: &ReportFilter,
        today: NaiveDate,
    ) -> AppResult<RevenueReport> {
        let members: HashMap<String, Member> = self
            .repository
            .list_members()
            .await?
            .into_iter()
            .map(|member| (member.id.clone(), member))
            .collect();

        // Payments of unknown members have no provider and cannot be reported.
        let mut entries: Vec<ReportEntry> = self
            .repository
            .list_payments()
            .await?
            .into_iter()
            .filter_map(|payment| {
                let member = members.get(&payment.member_id)?;
                Some(ReportEntry {
                    member_name: member.name.clone(),
                    plan: member.plan.clone(),
                    provider: member.provider.clone(),
                    payment,
                })
            })
            .filter(|entry| filter.includes(entry.payment.date, &entry.provider, today))
            .collect();
        entries.sort_by(|left, right| right.payment.date.cmp(&left.payment.date));

        let count_status = |status: PaymentStatus| {
            entries
                .iter()
                .filter(|entry| entry.payment.status == status)
                .count()
        };
        let successful_count = count_status(PaymentStatus::Successful);
        let failed_count = count_status(PaymentStatus::Failed);
        let pending_count = count_status(PaymentStatus::Pending);
        let total_amount = entries
            .iter()
            .filter(|entry| entry.payment.status == PaymentStatus::Successful)
            .map(|entry| entry.payment.amount)
            .sum();

        Ok(RevenueReport {
            entries,
            total_amount,
            successful_count,
            failed_count,
            pending_count,
        })
    }

    /// Builds the administrative dashboard summary.
    pub async fn dashboard_overview(&self, today: NaiveDate) -> AppResult<DashboardOverview> {
        let members = self.repository.list_members().await?;
        let mut payments = self.repository.list_payments().await?;
        sort_newest_first(&mut payments);

        let member_counts = members.iter().fold(
            MemberCounts {
                total: members.len(),
                ..MemberCounts::default()
            },
            |mut counts, member| {
                match member.status {
                    MemberStatus::Active => counts.active += 1,
                    MemberStatus::Inactive => counts.inactive += 1,
                    MemberStatus::Pending => counts.pending += 1,
                }
                counts
            },
        );

        let mut upcoming_recharges: Vec<Member> = members
            .into_iter()
            .filter(|member| member.next_recharge_date > today)
            .collect();
        upcoming_recharges.sort_by_key(|member| member.next_recharge_date);
        upcoming_recharges.truncate(UPCOMING_RECHARGES_LIMIT);

        let failed_payments = payments
            .iter()
            .filter(|payment| payment.status == PaymentStatus::Failed)
            .take(FAILED_PAYMENTS_LIMIT)
            .cloned()
            .collect();

        Ok(DashboardOverview {
            member_counts,
            total_revenue: successful_total(&payments),
            recent_payments: payments.into_iter().take(RECENT_PAYMENTS_LIMIT).collect(),
            upcoming_recharges,
            failed_payments,
        })
    }

    /// Builds the subscriber landing view for the member signed in as `email`.
    pub async fn subscriber_overview(&self, email: &str) -> AppResult<SubscriberOverview> {
        let member = self
            .repository
            .find_member_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("no member account is linked to '{email}'"))
            })?;

        let plan = self
            .repository
            .list_plans()
            .await?
            .into_iter()
            .find(|plan| plan.name == member.plan);

        let mut recent_payments = self.repository.list_payments_for_member(&member.id).await?;
        sort_newest_first(&mut recent_payments);
        recent_payments.truncate(RECENT_PAYMENTS_LIMIT);

        Ok(SubscriberOverview {
            member,
            plan,
            recent_payments,
        })
    }

    /// Lists the plan catalog, cheapest first.
    pub async fn list_plans(&self) -> AppResult<Vec<Plan>> {
        let mut plans = self.repository.list_plans().await?;
        plans.sort_by_key(|plan| plan.price);
        Ok(plans)
    }

    /// Lists carrier providers.
    pub async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        self.repository.list_providers().await
    }

    pub(super) async fn require_member(&self, member_id: &str) -> AppResult<Member> {
        self.repository
            .find_member(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("member '{member_id}' does not exist")))
    }
}

fn successful_total(payments: &[Payment]) -> u64 {
    payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Successful)
        .map(|payment| payment.amount)
        .sum()
}
