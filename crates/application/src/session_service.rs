//! Session store application service.
//!
//! Sole owner of the authenticated identity. Hydrates it from durable storage
//! at startup, replaces it on sign-in and clears it on sign-out. Storage
//! failures never fail these operations: the session keeps working in memory
//! and reports itself as non-persistent.

mod persistence;
#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use cableflow_core::{AppError, AppResult, NonEmptyString, UserIdentity};
use cableflow_domain::Capabilities;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{CredentialVerifier, SessionBlobStore, SessionSettings};

use persistence::{decode_identity, encode_identity};

/// Application service owning the process-wide session.
#[derive(Clone)]
pub struct SessionService {
    blob_store: Arc<dyn SessionBlobStore>,
    credential_verifier: Arc<dyn CredentialVerifier>,
    settings: SessionSettings,
    identity: Arc<RwLock<Option<UserIdentity>>>,
    sign_in_in_flight: Arc<Mutex<()>>,
    storage_guard: Arc<Mutex<()>>,
    persistent: Arc<AtomicBool>,
}

impl SessionService {
    /// Creates an empty session store.
    #[must_use]
    pub fn new(
        blob_store: Arc<dyn SessionBlobStore>,
        credential_verifier: Arc<dyn CredentialVerifier>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            blob_store,
            credential_verifier,
            settings,
            identity: Arc::new(RwLock::new(None)),
            sign_in_in_flight: Arc::new(Mutex::new(())),
            storage_guard: Arc::new(Mutex::new(())),
            persistent: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Hydrates the session from durable storage. Call once at startup.
    ///
    /// Absent, malformed and unknown-role blobs leave the session empty;
    /// undecodable blobs are removed so they are not read again.
    pub async fn initialize(&self) -> Option<UserIdentity> {
        let key = self.settings.storage_key();
        let _storage = self.storage_guard.lock().await;

        let restored = match self.blob_store.read(key).await {
            Ok(Some(blob)) => match decode_identity(&blob) {
                Ok(identity) => Some(identity),
                Err(error) => {
                    warn!(%error, "discarding persisted session identity");
                    if let Err(error) = self.blob_store.remove(key).await {
                        self.mark_degraded(&error);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                self.mark_degraded(&error);
                None
            }
        };

        if let Some(identity) = &restored {
            info!(
                identity_id = identity.id(),
                role = %identity.role(),
                "restored persisted session"
            );
        }

        self.replace_identity(restored.clone());
        restored
    }

    /// Signs in with email and password.
    ///
    /// Only one sign-in may be in flight at a time; a concurrent attempt
    /// fails with `AppError::Conflict` instead of waiting. A rejected
    /// credential leaves the current session untouched.
    ///
    /// The blob write and the in-memory swap run under the storage guard, so
    /// a concurrent `sign_out` either precedes both or follows both.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        let email = NonEmptyString::new(email.trim())
            .map_err(|_| AppError::Validation("email is required".to_owned()))?;
        let password = NonEmptyString::new(password)
            .map_err(|_| AppError::Validation("password is required".to_owned()))?;

        let Ok(_in_flight) = self.sign_in_in_flight.try_lock() else {
            return Err(AppError::Conflict(
                "a sign-in is already in progress".to_owned(),
            ));
        };

        let identity = match self
            .credential_verifier
            .verify(email.as_str(), password.as_str())
            .await
        {
            Ok(identity) => identity,
            Err(error) => {
                info!(%error, "sign-in attempt failed");
                return Err(error);
            }
        };

        {
            let _storage = self.storage_guard.lock().await;
            self.persist(&identity).await;
            self.replace_identity(Some(identity.clone()));
        }

        info!(
            identity_id = identity.id(),
            role = %identity.role(),
            persistent = self.is_persistent(),
            "signed in"
        );

        Ok(identity)
    }

    /// Clears the session and its persisted copy. Idempotent.
    pub async fn sign_out(&self) {
        let previous = {
            let _storage = self.storage_guard.lock().await;
            let previous = self.replace_identity(None);
            if let Err(error) = self.blob_store.remove(self.settings.storage_key()).await {
                self.mark_degraded(&error);
            }
            previous
        };

        if let Some(identity) = previous {
            info!(identity_id = identity.id(), "signed out");
        }
    }

    /// Returns the current identity, if signed in.
    #[must_use]
    pub fn current_identity(&self) -> Option<UserIdentity> {
        self.identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the capability flags of the current identity.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let identity = self.identity.read().unwrap_or_else(PoisonError::into_inner);
        Capabilities::for_identity(identity.as_ref())
    }

    /// Returns whether the last storage operation succeeded.
    ///
    /// `false` means the session currently lives in memory only and will not
    /// survive a restart.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent.load(Ordering::Relaxed)
    }

    async fn persist(&self, identity: &UserIdentity) {
        let stored = match encode_identity(identity) {
            Ok(blob) => {
                self.blob_store
                    .write(self.settings.storage_key(), &blob)
                    .await
            }
            Err(error) => Err(error),
        };

        match stored {
            Ok(()) => self.persistent.store(true, Ordering::Relaxed),
            Err(error) => self.mark_degraded(&error),
        }
    }

    fn replace_identity(&self, identity: Option<UserIdentity>) -> Option<UserIdentity> {
        let mut slot = self
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, identity)
    }

    fn mark_degraded(&self, error: &AppError) {
        warn!(%error, "session storage unavailable, keeping session in memory only");
        self.persistent.store(false, Ordering::Relaxed);
    }
}
