use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use cableflow_core::{AppError, UserIdentity};
use cableflow_domain::{Capabilities, Destination};

use crate::dto::{AuthLoginRequest, AuthSessionResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<AuthLoginRequest>,
) -> ApiResult<Json<AuthSessionResponse>> {
    let identity = state
        .session_service
        .sign_in(&payload.email, &payload.password)
        .await?;

    Ok(Json(session_response(identity)))
}

pub async fn logout_handler(State(state): State<AppState>) -> StatusCode {
    state.session_service.sign_out().await;
    StatusCode::NO_CONTENT
}

pub async fn me_handler(State(state): State<AppState>) -> ApiResult<Json<AuthSessionResponse>> {
    let identity = state
        .session_service
        .current_identity()
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    Ok(Json(session_response(identity)))
}

fn session_response(identity: UserIdentity) -> AuthSessionResponse {
    AuthSessionResponse {
        home: Destination::home_for(identity.role()).path().to_owned(),
        capabilities: Capabilities::for_identity(Some(&identity)).into(),
        identity: identity.into(),
    }
}
