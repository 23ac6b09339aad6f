use std::sync::Arc;

use cableflow_application::{
    AccessGate, BillingService, SessionBlobStore, SessionService, SessionSettings,
};
use cableflow_infrastructure::{
    FileSessionBlobStore, InMemoryBillingRepository, InMemorySessionBlobStore,
    PlaceholderCredentialVerifier, SimulatedRechargeProcessor,
};
use chrono::Local;
use tracing::info;

use crate::api_config::ApiConfig;
use crate::dev_seed;
use crate::state::AppState;

/// Wires adapters into services and restores the persisted session.
pub async fn build_app_state(config: &ApiConfig) -> AppState {
    let session_service = SessionService::new(
        build_session_blob_store(config),
        Arc::new(PlaceholderCredentialVerifier::new(config.sign_in_latency)),
        SessionSettings::default(),
    );
    session_service.initialize().await;

    let billing_repository = if config.dev_seed {
        dev_seed::billing_repository(Local::now().date_naive())
    } else {
        InMemoryBillingRepository::default()
    };
    let billing_service = BillingService::new(
        Arc::new(billing_repository),
        Arc::new(SimulatedRechargeProcessor::new(config.recharge_latency)),
    );

    AppState {
        access_gate: AccessGate::new(session_service.clone()),
        session_service,
        billing_service,
    }
}

fn build_session_blob_store(config: &ApiConfig) -> Arc<dyn SessionBlobStore> {
    match &config.session_storage_dir {
        Some(directory) => {
            info!(directory = %directory.display(), "persisting sessions to disk");
            Arc::new(FileSessionBlobStore::new(directory.clone()))
        }
        None => {
            info!("keeping sessions in memory only");
            Arc::new(InMemorySessionBlobStore::new())
        }
    }
}
