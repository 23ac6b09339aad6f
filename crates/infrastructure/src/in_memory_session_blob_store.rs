use std::collections::HashMap;

use async_trait::async_trait;
use cableflow_application::SessionBlobStore;
use cableflow_core::AppResult;
use tokio::sync::RwLock;

/// Process-local session blob store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemorySessionBlobStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBlobStore for InMemorySessionBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, blob: &str) -> AppResult<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.blobs.write().await.remove(key);
        Ok(())
    }
}
