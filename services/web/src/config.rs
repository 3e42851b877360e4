//! services/web/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Connection settings for the invitation database.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub db: DbConfig,
    pub log_level: Level,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server ---
        let bind_address = parse_or("BIND_ADDRESS", &lookup, "0.0.0.0:3000")?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Database ---
        let db = DbConfig {
            host: required("DB_HOST", &lookup)?,
            port: parse_or("DB_PORT", &lookup, "5432")?,
            name: required("DB_NAME", &lookup)?,
            user: required("DB_USER", &lookup)?,
            password: required("DB_PASSWORD", &lookup)?,
            ssl_mode: parse_or("DB_SSL_MODE", &lookup, "require")?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", &lookup, "5")?,
        };

        // --- Uploads ---
        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static/images"));
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", &lookup, "10485760")?;

        Ok(Self {
            bind_address,
            db,
            log_level,
            upload_dir,
            max_upload_bytes,
        })
    }
}

fn required<F>(key: &str, lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingVar(key.to_string()))
}

fn parse_or<T, F>(key: &str, lookup: &F, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const DB_VARS: &[(&str, &str)] = &[
        ("DB_HOST", "db.internal"),
        ("DB_NAME", "weddings"),
        ("DB_USER", "invite"),
        ("DB_PASSWORD", "secret"),
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let config = Config::from_lookup(env(DB_VARS)).unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.db.port, 5432);
        assert!(matches!(config.db.ssl_mode, PgSslMode::Require));
        assert_eq!(config.db.max_connections, 5);
        assert_eq!(config.upload_dir, PathBuf::from("static/images"));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn missing_credentials_are_reported_by_name() {
        let err = Config::from_lookup(env(&DB_VARS[..3])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "DB_PASSWORD"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut vars = DB_VARS.to_vec();
        vars.push(("DB_PORT", "not-a-port"));
        let err = Config::from_lookup(env(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "DB_PORT"));

        let mut vars = DB_VARS.to_vec();
        vars.push(("DB_SSL_MODE", "sometimes"));
        let err = Config::from_lookup(env(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v, _) if v == "DB_SSL_MODE"));
    }
}
