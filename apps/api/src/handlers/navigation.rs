use axum::Json;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Redirect;
use cableflow_application::index_destination;
use cableflow_core::AppError;

use crate::dto::{NavigationQuery, NavigationResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Resolves a client-side path through the access gate.
pub async fn navigation_handler(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let outcome = state.access_gate.navigate(&query.path);
    Json(NavigationResponse::new(
        outcome,
        state.access_gate.capabilities().into(),
    ))
}

/// The root path never renders; it forwards to sign-in or the role's home.
pub async fn index_handler(State(state): State<AppState>) -> Redirect {
    let identity = state.session_service.current_identity();
    Redirect::to(index_destination(identity.as_ref()).path())
}

pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!(
        "no route matches '{}'",
        uri.path()
    )))
}
