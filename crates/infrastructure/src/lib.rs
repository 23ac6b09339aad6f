//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod file_session_blob_store;
mod in_memory_billing_repository;
mod in_memory_session_blob_store;
mod placeholder_credential_verifier;
mod simulated_recharge_processor;

pub use file_session_blob_store::FileSessionBlobStore;
pub use in_memory_billing_repository::InMemoryBillingRepository;
pub use in_memory_session_blob_store::InMemorySessionBlobStore;
pub use placeholder_credential_verifier::{
    DEFAULT_SIGN_IN_LATENCY, PlaceholderCredentialVerifier,
};
pub use simulated_recharge_processor::{DEFAULT_RECHARGE_LATENCY, SimulatedRechargeProcessor};
