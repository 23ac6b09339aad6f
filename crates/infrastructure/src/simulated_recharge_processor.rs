//! Simulated payment gateway for recharges.

use std::time::Duration;

use async_trait::async_trait;
use cableflow_application::{RechargeConfirmation, RechargeProcessor};
use cableflow_core::AppResult;
use cableflow_domain::Member;
use tracing::info;
use uuid::Uuid;

/// Simulated gateway round-trip.
pub const DEFAULT_RECHARGE_LATENCY: Duration = Duration::from_millis(1500);

/// Recharge processor that waits a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedRechargeProcessor {
    latency: Duration,
}

impl SimulatedRechargeProcessor {
    /// Creates a processor with the given simulated latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedRechargeProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_RECHARGE_LATENCY)
    }
}

#[async_trait]
impl RechargeProcessor for SimulatedRechargeProcessor {
    async fn process(&self, member: &Member, amount: u64) -> AppResult<RechargeConfirmation> {
        tokio::time::sleep(self.latency).await;

        let reference = Uuid::new_v4().simple().to_string().to_uppercase();
        let transaction_id = format!("TRX{}", &reference[..12]);

        info!(
            member_id = member.id.as_str(),
            amount,
            transaction_id = transaction_id.as_str(),
            "simulated recharge charged"
        );

        Ok(RechargeConfirmation { transaction_id })
    }
}
