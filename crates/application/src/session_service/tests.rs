use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cableflow_core::{AppError, AppResult, Role, UserIdentity};
use tokio::sync::Mutex;

use crate::{CredentialVerifier, SESSION_STORAGE_KEY, SessionBlobStore, SessionSettings};

use super::SessionService;

#[derive(Default)]
struct FakeBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl FakeBlobStore {
    fn with_blob(blob: &str) -> Self {
        Self {
            blobs: Mutex::new(HashMap::from([(
                SESSION_STORAGE_KEY.to_owned(),
                blob.to_owned(),
            )])),
        }
    }

    async fn stored(&self) -> Option<String> {
        self.blobs.lock().await.get(SESSION_STORAGE_KEY).cloned()
    }
}

#[async_trait]
impl SessionBlobStore for FakeBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .await
            .insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.blobs.lock().await.remove(key);
        Ok(())
    }
}

/// Delays every write so other session operations can run meanwhile.
struct SlowWriteBlobStore {
    inner: FakeBlobStore,
    write_delay: Duration,
}

#[async_trait]
impl SessionBlobStore for SlowWriteBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        tokio::time::sleep(self.write_delay).await;
        self.inner.write(key, blob).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }
}

struct UnavailableBlobStore;

#[async_trait]
impl SessionBlobStore for UnavailableBlobStore {
    async fn read(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::PersistenceUnavailable("storage offline".to_owned()))
    }

    async fn write(&self, _key: &str, _blob: &str) -> AppResult<()> {
        Err(AppError::PersistenceUnavailable("quota exceeded".to_owned()))
    }

    async fn remove(&self, _key: &str) -> AppResult<()> {
        Err(AppError::PersistenceUnavailable("storage offline".to_owned()))
    }
}

/// Accepts any credentials; emails containing `admin` become administrators.
struct FakeVerifier {
    delay: Duration,
}

#[async_trait]
impl CredentialVerifier for FakeVerifier {
    async fn verify(&self, email: &str, _password: &str) -> AppResult<UserIdentity> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(if email.contains("admin") {
            UserIdentity::new("1", "Admin User", email, Role::Administrator)
        } else {
            UserIdentity::new("2", "Member User", email, Role::Subscriber)
        })
    }
}

struct RejectingVerifier;

#[async_trait]
impl CredentialVerifier for RejectingVerifier {
    async fn verify(&self, _email: &str, _password: &str) -> AppResult<UserIdentity> {
        Err(AppError::CredentialRejected(
            "invalid email or password".to_owned(),
        ))
    }
}

fn service_with(
    blob_store: Arc<dyn SessionBlobStore>,
    verifier: Arc<dyn CredentialVerifier>,
) -> SessionService {
    SessionService::new(blob_store, verifier, SessionSettings::default())
}

fn instant_verifier() -> Arc<dyn CredentialVerifier> {
    Arc::new(FakeVerifier {
        delay: Duration::ZERO,
    })
}

#[tokio::test]
async fn initialize_on_empty_storage_leaves_session_empty() {
    let service = service_with(Arc::new(FakeBlobStore::default()), instant_verifier());

    assert_eq!(service.initialize().await, None);
    assert_eq!(service.current_identity(), None);
    assert!(!service.capabilities().is_authenticated);
}

#[tokio::test]
async fn sign_in_derives_roles_and_persists_identity() {
    let blob_store = Arc::new(FakeBlobStore::default());
    let service = service_with(blob_store.clone(), instant_verifier());

    let admin = service.sign_in("admin@example.com", "anything").await;
    assert!(matches!(
        admin.as_ref().map(UserIdentity::role),
        Ok(Role::Administrator)
    ));
    assert!(service.capabilities().is_administrator);
    assert!(blob_store.stored().await.is_some());

    let subscriber = service.sign_in("jane@example.com", "anything").await;
    assert!(matches!(
        subscriber.as_ref().map(UserIdentity::role),
        Ok(Role::Subscriber)
    ));
    assert!(service.capabilities().is_subscriber);
    assert!(!service.capabilities().is_administrator);
}

#[tokio::test]
async fn persisted_identity_survives_restart() {
    let blob_store = Arc::new(FakeBlobStore::default());
    let before = service_with(blob_store.clone(), instant_verifier())
        .sign_in("admin@example.com", "secret")
        .await
        .ok();
    assert!(before.is_some());

    let restarted = service_with(blob_store, instant_verifier());
    let after = restarted.initialize().await;

    assert_eq!(after, before);
    assert_eq!(restarted.current_identity(), before);
    assert!(restarted.capabilities().is_administrator);
}

#[tokio::test]
async fn malformed_blob_is_treated_as_absent_and_discarded() {
    let blob_store = Arc::new(FakeBlobStore::with_blob("{not json"));
    let service = service_with(blob_store.clone(), instant_verifier());

    assert_eq!(service.initialize().await, None);
    assert_eq!(service.current_identity(), None);
    assert_eq!(blob_store.stored().await, None);
}

#[tokio::test]
async fn unknown_role_blob_denies_everything() {
    let blob_store = Arc::new(FakeBlobStore::with_blob(
        r#"{"id":"7","name":"Operator","email":"ops@example.com","role":"operator"}"#,
    ));
    let service = service_with(blob_store, instant_verifier());

    assert_eq!(service.initialize().await, None);
    let capabilities = service.capabilities();
    assert!(!capabilities.is_authenticated);
    assert!(!capabilities.is_administrator);
    assert!(!capabilities.is_subscriber);
}

#[tokio::test]
async fn sign_out_twice_is_a_no_op() {
    let blob_store = Arc::new(FakeBlobStore::default());
    let service = service_with(blob_store.clone(), instant_verifier());
    assert!(service.sign_in("jane@example.com", "pw").await.is_ok());

    service.sign_out().await;
    assert_eq!(service.current_identity(), None);
    assert_eq!(blob_store.stored().await, None);

    service.sign_out().await;
    assert_eq!(service.current_identity(), None);
    assert!(!service.capabilities().is_authenticated);
}

#[tokio::test]
async fn empty_credentials_are_rejected_before_verification() {
    let service = service_with(Arc::new(FakeBlobStore::default()), instant_verifier());

    assert!(matches!(
        service.sign_in("   ", "pw").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.sign_in("jane@example.com", "").await,
        Err(AppError::Validation(_))
    ));
    assert_eq!(service.current_identity(), None);
}

#[tokio::test]
async fn rejected_credentials_keep_the_current_session() {
    let blob_store = Arc::new(FakeBlobStore::default());
    let accepting = service_with(blob_store.clone(), instant_verifier());
    let signed_in = accepting.sign_in("jane@example.com", "pw").await.ok();

    let rejecting = service_with(blob_store, Arc::new(RejectingVerifier));
    assert_eq!(rejecting.initialize().await, signed_in);

    let result = rejecting.sign_in("mallory@example.com", "guess").await;
    assert!(matches!(result, Err(AppError::CredentialRejected(_))));
    assert_eq!(rejecting.current_identity(), signed_in);
}

#[tokio::test]
async fn unavailable_storage_degrades_to_memory_only_session() {
    let service = service_with(Arc::new(UnavailableBlobStore), instant_verifier());

    assert_eq!(service.initialize().await, None);
    assert!(!service.is_persistent());

    let identity = service.sign_in("admin@example.com", "pw").await;
    assert!(identity.is_ok());
    assert!(service.capabilities().is_administrator);
    assert!(!service.is_persistent());

    service.sign_out().await;
    assert_eq!(service.current_identity(), None);
}

#[tokio::test(start_paused = true)]
async fn concurrent_sign_in_is_refused_while_one_is_in_flight() {
    let service = service_with(
        Arc::new(FakeBlobStore::default()),
        Arc::new(FakeVerifier {
            delay: Duration::from_millis(500),
        }),
    );

    let first = tokio::spawn({
        let service = service.clone();
        async move { service.sign_in("admin@example.com", "pw").await }
    });
    tokio::task::yield_now().await;

    let second = service.sign_in("jane@example.com", "pw").await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    let first = first
        .await
        .unwrap_or_else(|error| panic!("sign-in task panicked: {error}"));
    assert!(first.is_ok());
    assert!(service.capabilities().is_administrator);

    let third = service.sign_in("jane@example.com", "pw").await;
    assert!(third.is_ok());
    assert!(service.capabilities().is_subscriber);
}

#[tokio::test(start_paused = true)]
async fn sign_out_during_a_pending_write_leaves_nothing_to_restore() {
    let blob_store = Arc::new(SlowWriteBlobStore {
        inner: FakeBlobStore::default(),
        write_delay: Duration::from_millis(100),
    });
    let service = service_with(blob_store.clone(), instant_verifier());

    let sign_in = tokio::spawn({
        let service = service.clone();
        async move { service.sign_in("admin@example.com", "pw").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;

    service.sign_out().await;
    let signed_in = sign_in
        .await
        .unwrap_or_else(|error| panic!("sign-in task panicked: {error}"));
    assert!(signed_in.is_ok());

    assert_eq!(service.current_identity(), None);
    assert_eq!(blob_store.inner.stored().await, None);

    let restarted = service_with(blob_store, instant_verifier());
    assert_eq!(restarted.initialize().await, None);
}

#[tokio::test(start_paused = true)]
async fn identity_is_published_once_the_blob_is_written() {
    let blob_store = Arc::new(SlowWriteBlobStore {
        inner: FakeBlobStore::default(),
        write_delay: Duration::from_millis(100),
    });
    let service = service_with(blob_store.clone(), instant_verifier());

    let sign_in = tokio::spawn({
        let service = service.clone();
        async move { service.sign_in("jane@example.com", "pw").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(service.current_identity(), None);

    let signed_in = sign_in
        .await
        .unwrap_or_else(|error| panic!("sign-in task panicked: {error}"))
        .ok();
    assert_eq!(service.current_identity(), signed_in);
    assert!(blob_store.inner.stored().await.is_some());
}
