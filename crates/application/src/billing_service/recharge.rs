use cableflow_core::{AppError, AppResult};
use cableflow_domain::{PaymentStatus, extended_validity_end, validate_recharge_amount};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::NewPayment;

use super::*;

/// Outcome of a completed recharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RechargeReceipt {
    /// Recharged member.
    pub member_id: String,
    /// Identifier of the recorded payment.
    pub payment_id: String,
    /// Amount in whole rupees.
    pub amount: u64,
    /// Gateway transaction reference.
    pub transaction_id: String,
    /// Last day of the extended validity window.
    pub validity_end: NaiveDate,
}

impl BillingService {
    /// Recharges a member and records the payment.
    pub async fn recharge(
        &self,
        member_id: &str,
        amount: u64,
        today: NaiveDate,
    ) -> AppResult<RechargeReceipt> {
        validate_recharge_amount(amount)?;
        let member = self.require_member(member_id).await?;

        let confirmation = self.recharge_processor.process(&member, amount).await?;
        let payment = self
            .repository
            .record_payment(NewPayment {
                member_id: member.id.clone(),
                amount,
                date: today,
                status: PaymentStatus::Successful,
                transaction_id: confirmation.transaction_id,
            })
            .await?;

        info!(
            member_id = member.id.as_str(),
            payment_id = payment.id.as_str(),
            amount,
            "recharge completed"
        );

        Ok(RechargeReceipt {
            member_id: member.id,
            payment_id: payment.id,
            amount,
            transaction_id: payment.transaction_id,
            validity_end: extended_validity_end(today),
        })
    }

    /// Recharges the member account linked to a subscriber email.
    pub async fn recharge_subscriber(
        &self,
        email: &str,
        amount: u64,
        today: NaiveDate,
    ) -> AppResult<RechargeReceipt> {
        let member = self
            .repository
            .find_member_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("no member account is linked to '{email}'"))
            })?;

        self.recharge(&member.id, amount, today).await
    }
}
