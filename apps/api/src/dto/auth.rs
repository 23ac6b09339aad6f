use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CapabilitiesResponse, UserIdentityResponse};

/// Incoming payload for email/password login.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/auth-login-request.ts"
)]
pub struct AuthLoginRequest {
    pub email: String,
    pub password: String,
}

/// The signed-in session as seen by the front end.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/auth-session-response.ts"
)]
pub struct AuthSessionResponse {
    pub identity: UserIdentityResponse,
    pub capabilities: CapabilitiesResponse,
    /// Landing path for the identity's role.
    pub home: String,
}
