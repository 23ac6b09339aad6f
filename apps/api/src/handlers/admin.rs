use axum::Json;
use axum::extract::{Path, Query, State};
use cableflow_application::{DashboardOverview, MemberProfile, RechargeReceipt, RevenueReport};
use cableflow_domain::{Member, MemberFilter, Plan, Provider, ReportFilter};
use serde::Serialize;

use crate::dto::{RechargeRequest, RechargeSearchQuery, UserIdentityResponse};
use crate::error::ApiResult;
use crate::state::AppState;

use super::today;

/// Options for the add-member form.
#[derive(Debug, Serialize)]
pub struct MemberFormOptions {
    pub plans: Vec<Plan>,
    pub providers: Vec<Provider>,
}

/// Members eligible for recharge plus the plans they can buy.
#[derive(Debug, Serialize)]
pub struct RechargeCandidates {
    pub members: Vec<Member>,
    pub plans: Vec<Plan>,
}

/// Administrator settings view.
#[derive(Debug, Serialize)]
pub struct AdminSettings {
    pub identity: Option<UserIdentityResponse>,
    pub session_persistence: &'static str,
    pub plans: Vec<Plan>,
    pub providers: Vec<Provider>,
}

pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardOverview>> {
    let overview = state.billing_service.dashboard_overview(today()).await?;
    Ok(Json(overview))
}

pub async fn list_members_handler(
    State(state): State<AppState>,
    Query(filter): Query<MemberFilter>,
) -> ApiResult<Json<Vec<Member>>> {
    let members = state.billing_service.search_members(&filter).await?;
    Ok(Json(members))
}

pub async fn member_form_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<MemberFormOptions>> {
    Ok(Json(MemberFormOptions {
        plans: state.billing_service.list_plans().await?,
        providers: state.billing_service.list_providers().await?,
    }))
}

pub async fn member_detail_handler(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<MemberProfile>> {
    let profile = state.billing_service.member_profile(&member_id).await?;
    Ok(Json(profile))
}

pub async fn recharge_candidates_handler(
    State(state): State<AppState>,
    Query(query): Query<RechargeSearchQuery>,
) -> ApiResult<Json<RechargeCandidates>> {
    Ok(Json(RechargeCandidates {
        members: state
            .billing_service
            .recharge_candidates(query.search.as_deref())
            .await?,
        plans: state.billing_service.list_plans().await?,
    }))
}

pub async fn recharge_member_handler(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    Json(payload): Json<RechargeRequest>,
) -> ApiResult<Json<RechargeReceipt>> {
    let receipt = state
        .billing_service
        .recharge(&member_id, payload.amount, today())
        .await?;
    Ok(Json(receipt))
}

pub async fn reports_handler(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> ApiResult<Json<RevenueReport>> {
    let report = state.billing_service.revenue_report(&filter, today()).await?;
    Ok(Json(report))
}

pub async fn settings_handler(State(state): State<AppState>) -> ApiResult<Json<AdminSettings>> {
    let persistent = state.session_service.is_persistent();

    Ok(Json(AdminSettings {
        identity: state
            .session_service
            .current_identity()
            .map(UserIdentityResponse::from),
        session_persistence: if persistent { "durable" } else { "memory_only" },
        plans: state.billing_service.list_plans().await?,
        providers: state.billing_service.list_providers().await?,
    }))
}
