//! Route access decisions.
//!
//! The gate maps the current session and a route requirement to either
//! "render" or "redirect to a destination". Decisions are values; acting on
//! them is left to the router.

#[cfg(test)]
mod tests;

use cableflow_core::UserIdentity;
use cableflow_domain::{AppRoute, Capabilities, Destination, RouteClass, RouteRequirement};
use serde::Serialize;
use tracing::debug;

use crate::SessionService;

/// Classification of one navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// No identity in the session.
    Unauthenticated,
    /// Signed in, but the role does not match the route.
    AuthenticatedWrongRole,
    /// Signed in with a matching role.
    Authorized,
}

/// What the router should do for a gated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "destination")]
pub enum AccessDecision {
    /// Show the requested content.
    Render,
    /// Navigate to another destination instead.
    Redirect(Destination),
}

/// Result of resolving a path through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The route may be shown.
    Render(AppRoute),
    /// The visitor must be sent elsewhere.
    Redirect(Destination),
    /// No route matches the path.
    NotFound,
}

/// Classifies an identity against a route requirement.
#[must_use]
pub fn access_state(identity: Option<&UserIdentity>, requirement: RouteRequirement) -> AccessState {
    let Some(identity) = identity else {
        return AccessState::Unauthenticated;
    };

    let capabilities = Capabilities::for_identity(Some(identity));
    match requirement {
        RouteRequirement::AnyRole => AccessState::Authorized,
        RouteRequirement::Role(required) if capabilities.holds(required) => {
            AccessState::Authorized
        }
        RouteRequirement::Role(_) => AccessState::AuthenticatedWrongRole,
    }
}

/// Decides whether content behind `requirement` renders for `identity`.
///
/// Unauthenticated visitors go to sign-in; a role mismatch sends the visitor
/// to the home of the role they actually hold.
#[must_use]
pub fn evaluate_access(
    identity: Option<&UserIdentity>,
    requirement: RouteRequirement,
) -> AccessDecision {
    match (access_state(identity, requirement), identity) {
        (AccessState::Authorized, _) => AccessDecision::Render,
        (AccessState::AuthenticatedWrongRole, Some(identity)) => {
            AccessDecision::Redirect(Destination::home_for(identity.role()))
        }
        (AccessState::Unauthenticated | AccessState::AuthenticatedWrongRole, _) => {
            AccessDecision::Redirect(Destination::SignIn)
        }
    }
}

/// Resolves the root path: sign-in for visitors, the role's home otherwise.
#[must_use]
pub fn index_destination(identity: Option<&UserIdentity>) -> Destination {
    identity.map_or(Destination::SignIn, |identity| {
        Destination::home_for(identity.role())
    })
}

/// Access gate bound to a session store.
#[derive(Clone)]
pub struct AccessGate {
    session_service: SessionService,
}

impl AccessGate {
    /// Creates a gate reading from the given session store.
    #[must_use]
    pub fn new(session_service: SessionService) -> Self {
        Self { session_service }
    }

    /// Returns the capability flags of the current session.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.session_service.capabilities()
    }

    /// Decides access for a requirement against the current session.
    #[must_use]
    pub fn decide(&self, requirement: RouteRequirement) -> AccessDecision {
        let identity = self.session_service.current_identity();
        let decision = evaluate_access(identity.as_ref(), requirement);

        debug!(
            ?requirement,
            state = ?access_state(identity.as_ref(), requirement),
            ?decision,
            "access decision"
        );

        decision
    }

    /// Resolves a request path to a navigation outcome.
    ///
    /// Recomputed on every call; the session may change between navigations.
    #[must_use]
    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        let Some(route) = AppRoute::parse(path) else {
            debug!(path, "no route matches path");
            return NavigationOutcome::NotFound;
        };

        match route.class() {
            RouteClass::Public => NavigationOutcome::Render(route),
            RouteClass::Index => {
                let identity = self.session_service.current_identity();
                NavigationOutcome::Redirect(index_destination(identity.as_ref()))
            }
            class => match class.requirement().map(|requirement| self.decide(requirement)) {
                None | Some(AccessDecision::Render) => NavigationOutcome::Render(route),
                Some(AccessDecision::Redirect(destination)) => {
                    NavigationOutcome::Redirect(destination)
                }
            },
        }
    }
}
