use cableflow_application::NavigationOutcome;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::CapabilitiesResponse;

/// Query string of the navigation endpoint.
#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub path: String,
}

/// Gate outcome for one client-side navigation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/navigation-response.ts"
)]
pub struct NavigationResponse {
    /// `render`, `redirect` or `not_found`.
    pub outcome: String,
    /// Canonical path of the rendered route.
    pub route: Option<String>,
    /// Redirect target.
    pub location: Option<String>,
    pub capabilities: CapabilitiesResponse,
}

impl NavigationResponse {
    #[must_use]
    pub fn new(outcome: NavigationOutcome, capabilities: CapabilitiesResponse) -> Self {
        let (kind, route, location) = match outcome {
            NavigationOutcome::Render(route) => ("render", Some(route.path()), None),
            NavigationOutcome::Redirect(destination) => {
                ("redirect", None, Some(destination.path().to_owned()))
            }
            NavigationOutcome::NotFound => ("not_found", None, None),
        };

        Self {
            outcome: kind.to_owned(),
            route,
            location,
            capabilities,
        }
    }
}
