use cableflow_core::UserIdentity;
use cableflow_domain::Capabilities;
use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `durable` while the session is written to storage, `memory_only`
    /// after a storage failure.
    pub session_persistence: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn new(persistent: bool) -> Self {
        Self {
            status: "ok",
            session_persistence: if persistent { "durable" } else { "memory_only" },
        }
    }
}

/// API representation of the authenticated user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/user-identity-response.ts"
)]
pub struct UserIdentityResponse {
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// `admin` or `member`.
    pub role: String,
}

impl From<UserIdentity> for UserIdentityResponse {
    fn from(identity: UserIdentity) -> Self {
        Self {
            id: identity.id().to_owned(),
            display_name: identity.display_name().to_owned(),
            email: identity.email().to_owned(),
            role: identity.role().as_str().to_owned(),
        }
    }
}

/// Capability flags of the current session.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/capabilities-response.ts"
)]
pub struct CapabilitiesResponse {
    pub is_authenticated: bool,
    pub is_administrator: bool,
    pub is_subscriber: bool,
}

impl From<Capabilities> for CapabilitiesResponse {
    fn from(capabilities: Capabilities) -> Self {
        Self {
            is_authenticated: capabilities.is_authenticated,
            is_administrator: capabilities.is_administrator,
            is_subscriber: capabilities.is_subscriber,
        }
    }
}
