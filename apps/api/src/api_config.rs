use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use cableflow_core::AppError;
use cableflow_infrastructure::{DEFAULT_RECHARGE_LATENCY, DEFAULT_SIGN_IN_LATENCY};
use tracing_subscriber::EnvFilter;

const DEFAULT_SESSION_STORAGE_DIR: &str = ".cableflow";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    /// `None` keeps the session in process memory only.
    pub session_storage_dir: Option<PathBuf>,
    pub sign_in_latency: Duration,
    pub recharge_latency: Duration,
    pub dev_seed: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let session_storage_dir = match lookup("SESSION_STORAGE_DIR") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(PathBuf::from(value)),
            None => Some(PathBuf::from(DEFAULT_SESSION_STORAGE_DIR)),
        };

        let sign_in_latency =
            duration_ms(&lookup, "SIGN_IN_LATENCY_MS", DEFAULT_SIGN_IN_LATENCY)?;
        let recharge_latency =
            duration_ms(&lookup, "RECHARGE_LATENCY_MS", DEFAULT_RECHARGE_LATENCY)?;
        let dev_seed = lookup("DEV_SEED")
            .unwrap_or_else(|| "true".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            session_storage_dir,
            sign_in_latency,
            recharge_latency,
            dev_seed,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn duration_ms(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: Duration,
) -> Result<Duration, AppError> {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|error| AppError::Validation(format!("invalid {name}: {error}")))
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(default))
}
