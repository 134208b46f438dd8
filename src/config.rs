//! Service configuration parsed from environment variables.
//!
//! `main` loads `.env` (via `dotenvy`) before calling [`AppConfig::from_env`].

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("no vault store configured: set DATABASE_URL or VAULT_FIXTURE")]
    MissingStore,
}

/// Which backend serves vault data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres { database_url: String, max_connections: u32 },
    Fixture(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `DATABASE_URL`: Postgres connection string; takes precedence
    /// - `DB_MAX_CONNECTIONS`: pool size, default 5
    /// - `VAULT_FIXTURE`: JSON fixture path for the in-memory store
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse or no store is configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let store = if let Some(database_url) = non_empty(lookup("DATABASE_URL")) {
            let max_connections = lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
            StoreConfig::Postgres { database_url, max_connections }
        } else if let Some(path) = non_empty(lookup("VAULT_FIXTURE")) {
            StoreConfig::Fixture(PathBuf::from(path))
        } else {
            return Err(ConfigError::MissingStore);
        };

        Ok(Self { port, store })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
