
use async_trait::async_trait;
use cableflow_application::{BillingRepository, NewPayment};
use cableflow_core::AppResult;
use cableflow_domain::{Member, Payment, Plan, Provider};
use tokio::sync::RwLock;

/// Billing dataset held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBillingRepository {
    members: RwLock<Vec<Member>>,
    payments: RwLock<Vec<Payment>>,
    plans: Vec<Plan>,
    providers: Vec<Provider>,
}

impl InMemoryBillingRepository {
    /// Creates a repository over the given records.
    #[must_use]
    pub fn new(
        members: Vec<Member>,
        payments: Vec<Payment>,
        plans: Vec<Plan>,
        providers: Vec<Provider>,
    ) -> Self {
        Self {
            members: RwLock::new(members),
            payments: RwLock::new(payments),
            plans,
            providers,
        }
    }
}

#[async_trait]
impl BillingRepository for InMemoryBillingRepository {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        Ok(self.members.read().await.clone())
    }

    async fn find_member(&self, member_id: &str) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|member| member.id == member_id)
            .cloned())
    }

    async fn find_member_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|member| member.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_payments(&self) -> AppResult<Vec<Payment>> {
        Ok(self.payments.read().await.clone())
    }

    async fn list_payments_for_member(&self, member_id: &str) -> AppResult<Vec<Payment>> {
        Ok(self
            .payments
            .read()
            .await
            .iter()
            .filter(|payment| payment.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn record_payment(&self, payment: NewPayment) -> AppResult<Payment> {
        let mut payments = self.payments.write().await;

        let recorded = Payment {
            id: format!("PAY{:03}", payments.len() + 1),
            member_id: payment.member_id,
            amount: payment.amount,
            date: payment.date,
            status: payment.status,
            transaction_id: payment.transaction_id,
        };
        payments.push(recorded.clone());

        Ok(recorded)
    }

    async fn list_plans(&self) -> AppResult<Vec<Plan>> {
        Ok(self.plans.clone())
    }

    async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        Ok(self.providers.clone())
    }
}
