use axum::Json;
use axum::extract::{Query, State};
use cableflow_application::{PaymentHistory, RechargeReceipt, SubscriberOverview};
use cableflow_core::AppError;
use cableflow_domain::{Member, PaymentFilter, Plan};
use serde::Serialize;

use crate::dto::RechargeRequest;
use crate::error::ApiResult;
use crate::state::AppState;

use super::today;

/// The subscriber's current plan and the catalog to switch to.
#[derive(Debug, Serialize)]
pub struct SubscriberPlan {
    pub current: Option<Plan>,
    pub plans: Vec<Plan>,
}

/// Data for the self-service recharge form.
#[derive(Debug, Serialize)]
pub struct SubscriberRechargeOptions {
    pub member: Member,
    pub plans: Vec<Plan>,
}

fn subscriber_email(state: &AppState) -> ApiResult<String> {
    state
        .session_service
        .current_identity()
        .map(|identity| identity.email().to_owned())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()).into())
}

pub async fn overview_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SubscriberOverview>> {
    let email = subscriber_email(&state)?;
    let overview = state.billing_service.subscriber_overview(&email).await?;
    Ok(Json(overview))
}

pub async fn plan_handler(State(state): State<AppState>) -> ApiResult<Json<SubscriberPlan>> {
    let email = subscriber_email(&state)?;
    let overview = state.billing_service.subscriber_overview(&email).await?;

    Ok(Json(SubscriberPlan {
        current: overview.plan,
        plans: state.billing_service.list_plans().await?,
    }))
}

pub async fn payments_handler(
    State(state): State<AppState>,
    Query(filter): Query<PaymentFilter>,
) -> ApiResult<Json<PaymentHistory>> {
    let email = subscriber_email(&state)?;
    let overview = state.billing_service.subscriber_overview(&email).await?;
    let history = state
        .billing_service
        .payment_history(&overview.member.id, &filter)
        .await?;
    Ok(Json(history))
}

pub async fn recharge_options_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SubscriberRechargeOptions>> {
    let email = subscriber_email(&state)?;
    let overview = state.billing_service.subscriber_overview(&email).await?;

    Ok(Json(SubscriberRechargeOptions {
        member: overview.member,
        plans: state.billing_service.list_plans().await?,
    }))
}

pub async fn recharge_handler(
    State(state): State<AppState>,
    Json(payload): Json<RechargeRequest>,
) -> ApiResult<Json<RechargeReceipt>> {
    let email = subscriber_email(&state)?;
    let receipt = state
        .billing_service
        .recharge_subscriber(&email, payload.amount, today())
        .await?;
    Ok(Json(receipt))
}
