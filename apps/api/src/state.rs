use cableflow_application::{AccessGate, BillingService, SessionService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub access_gate: AccessGate,
    pub billing_service: BillingService,
}
