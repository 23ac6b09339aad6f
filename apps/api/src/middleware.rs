use axum::extract::{Extension, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use cableflow_application::AccessDecision;
use cableflow_domain::RouteRequirement;

use crate::state::AppState;

/// Runs the access gate for the route group's requirement.
///
/// Denied requests are answered with `303 See Other` to the gate's
/// destination; authorization failures never produce an error page.
pub async fn require_route_access(
    State(state): State<AppState>,
    Extension(requirement): Extension<RouteRequirement>,
    request: Request,
    next: Next,
) -> Response {
    match state.access_gate.decide(requirement) {
        AccessDecision::Render => next.run(request).await,
        AccessDecision::Redirect(destination) => Redirect::to(destination.path()).into_response(),
    }
}
