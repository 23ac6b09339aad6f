use async_trait::async_trait;

use cableflow_core::{AppResult, UserIdentity};

/// Fixed key the authenticated identity is stored under.
pub const SESSION_STORAGE_KEY: &str = "cable_flow_user";

/// Durable key-value storage for the serialized session identity.
///
/// Implementations report storage failures as
/// `AppError::PersistenceUnavailable`.
#[async_trait]
pub trait SessionBlobStore: Send + Sync {
    /// Reads the blob stored under `key`, if any.
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    async fn write(&self, key: &str, blob: &str) -> AppResult<()>;

    /// Removes the blob stored under `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Port that turns sign-in credentials into an identity.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the credentials and returns the authenticated identity.
    ///
    /// Returns `AppError::CredentialRejected` when the credentials are not
    /// accepted.
    async fn verify(&self, email: &str, password: &str) -> AppResult<UserIdentity>;
}

/// Session store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    storage_key: String,
}

impl SessionSettings {
    /// Creates settings that persist the identity under `storage_key`.
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_str()
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}
