use std::str::FromStr;

use cableflow_core::{AppError, AppResult, NonEmptyString, Role, UserIdentity};
use serde::Deserialize;

/// Stored identity shape. The role stays a raw string so that values outside
/// the closed role set surface as `AppError::UnknownRole` rather than as a
/// generic decode failure.
#[derive(Debug, Deserialize)]
struct PersistedIdentity {
    id: String,
    name: String,
    email: String,
    role: Option<String>,
}

pub(super) fn encode_identity(identity: &UserIdentity) -> AppResult<String> {
    serde_json::to_string(identity)
        .map_err(|error| AppError::Internal(format!("failed to encode session identity: {error}")))
}

pub(super) fn decode_identity(blob: &str) -> AppResult<UserIdentity> {
    let persisted = serde_json::from_str::<PersistedIdentity>(blob)
        .map_err(|error| AppError::MalformedPersistedIdentity(error.to_string()))?;

    let id = NonEmptyString::new(persisted.id).map_err(|_| {
        AppError::MalformedPersistedIdentity("identity id must not be empty".to_owned())
    })?;
    let role = persisted
        .role
        .ok_or_else(|| AppError::MalformedPersistedIdentity("identity role is not set".to_owned()))
        .and_then(|role| Role::from_str(&role))?;

    Ok(UserIdentity::new(id, persisted.name, persisted.email, role))
}
