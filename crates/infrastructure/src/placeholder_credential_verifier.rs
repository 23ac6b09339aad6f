//! Development credential verifier. Accepts any credentials.

use std::time::Duration;

use async_trait::async_trait;
use cableflow_application::CredentialVerifier;
use cableflow_core::{AppResult, Role, UserIdentity};
use tracing::warn;

/// Simulated round-trip of a sign-in request.
pub const DEFAULT_SIGN_IN_LATENCY: Duration = Duration::from_millis(500);

/// Credential verifier that performs no verification.
///
/// Waits a fixed latency, then derives the role from the email: any email
/// containing `admin` signs in as the administrator, every other email as
/// the subscriber. Must be replaced by a real verifier before production use.
#[derive(Debug, Clone)]
pub struct PlaceholderCredentialVerifier {
    latency: Duration,
}

impl PlaceholderCredentialVerifier {
    /// Creates a placeholder verifier with the given simulated latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        warn!(
            latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
            "placeholder credential verifier in use; credentials are not checked and must be verified by a real identity provider"
        );

        Self { latency }
    }
}

impl Default for PlaceholderCredentialVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_SIGN_IN_LATENCY)
    }
}

#[async_trait]
impl CredentialVerifier for PlaceholderCredentialVerifier {
    async fn verify(&self, email: &str, _password: &str) -> AppResult<UserIdentity> {
        tokio::time::sleep(self.latency).await;

        let identity = if email.contains("admin") {
            UserIdentity::new("1", "Admin User", email, Role::Administrator)
        } else {
            UserIdentity::new("2", "Member User", email, Role::Subscriber)
        };

        Ok(identity)
    }
}
