//! Server settings loaded from environment variables.
//!
//! Every variable is optional. Values that are present but cannot be parsed are
//! reported as configuration errors instead of being replaced by defaults.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Default seed file location, relative to the working directory.
pub const DEFAULT_FLEET_SEED_PATH: &str = "fleet.toml";
/// Default quiet period for the search box, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Runtime settings for the fleet desk server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// `SeaORM` connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Location of the seed data file (`FLEET_SEED_PATH`)
    pub fleet_seed_path: PathBuf,
    /// Run the seed before serving (`SEED_ON_START`)
    pub seed_on_start: bool,
    /// Quiet period before a search edit is dispatched (`SEARCH_DEBOUNCE_MS`)
    pub search_debounce: Duration,
}

impl ServerConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns `Error::Config` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `Error::Config` if a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config {
                message: format!("BIND_ADDR is not a socket address: {e}"),
            })?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let fleet_seed_path = PathBuf::from(
            lookup("FLEET_SEED_PATH").unwrap_or_else(|| DEFAULT_FLEET_SEED_PATH.to_string()),
        );

        let seed_on_start = match lookup("SEED_ON_START") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| Error::Config {
                message: format!("SEED_ON_START must be true or false, got {raw:?}"),
            })?,
            None => false,
        };

        let debounce_ms = match lookup("SEARCH_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| Error::Config {
                message: format!("SEARCH_DEBOUNCE_MS is not a number of milliseconds: {e}"),
            })?,
            None => DEFAULT_SEARCH_DEBOUNCE_MS,
        };

        Ok(Self {
            bind_addr,
            database_url,
            fleet_seed_path,
            seed_on_start,
            search_debounce: Duration::from_millis(debounce_ms),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.fleet_seed_path, PathBuf::from("fleet.toml"));
        assert!(!config.seed_on_start);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_ON_START", "yes"),
            ("SEARCH_DEBOUNCE_MS", "150"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.seed_on_start);
        assert_eq!(config.search_debounce, Duration::from_millis(150));
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            config_from(&[("SEED_ON_START", "maybe")]),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            config_from(&[("SEARCH_DEBOUNCE_MS", "-1")]),
            Err(Error::Config { .. })
        ));
    }
}
