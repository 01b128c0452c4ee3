use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    time::Duration,
};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ML_SERVICE_URL: &str = "http://ml:8000";
const DEFAULT_ML_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_ML_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
/// Upload ceiling for the multipart lecture form (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub db_connect_timeout: Duration,

    pub ml_service_url: Url,
    pub ml_request_timeout: Duration,
    pub ml_connect_timeout: Duration,

    pub bind_address: SocketAddr,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let ml_service_url = lookup("ML_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_ML_SERVICE_URL.to_string());
        let ml_service_url = Url::parse(&ml_service_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "ML_SERVICE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let ml_request_timeout = Duration::from_secs(parse_or(
            &lookup,
            "ML_REQUEST_TIMEOUT_SECS",
            DEFAULT_ML_REQUEST_TIMEOUT_SECS,
        )?);
        let ml_connect_timeout = Duration::from_secs(parse_or(
            &lookup,
            "ML_CONNECT_TIMEOUT_SECS",
            DEFAULT_ML_CONNECT_TIMEOUT_SECS,
        )?);
        let db_connect_timeout = Duration::from_secs(parse_or(
            &lookup,
            "DB_CONNECT_TIMEOUT_SECS",
            DEFAULT_DB_CONNECT_TIMEOUT_SECS,
        )?);
        let bind_address = parse_or(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self {
            database_url,
            db_connect_timeout,
            ml_service_url,
            ml_request_timeout,
            ml_connect_timeout,
            bind_address,
            max_upload_bytes,
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
    }
}
