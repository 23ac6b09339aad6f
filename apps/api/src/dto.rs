mod auth;
mod billing;
mod common;
mod navigation;

pub use auth::{AuthLoginRequest, AuthSessionResponse};
pub use billing::{RechargeRequest, RechargeSearchQuery};
pub use common::{CapabilitiesResponse, HealthResponse, UserIdentityResponse};
pub use navigation::{NavigationQuery, NavigationResponse};
