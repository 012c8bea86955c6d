//! Application configuration loaded from environment variables.

use std::env;

/// Default listening port.
const DEFAULT_PORT: u16 = 3000;

/// Which document store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-process store; data is lost on restart.
    Memory,
    /// Google Cloud Firestore (or its emulator).
    Firestore,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Storage backend selection
    pub storage_backend: StorageBackend,
    /// GCP project ID (used by the Firestore backend)
    pub gcp_project_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match lookup("STORAGE_BACKEND")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("memory") => StorageBackend::Memory,
            Some("firestore") => StorageBackend::Firestore,
            Some(other) => {
                return Err(ConfigError::Invalid(
                    "STORAGE_BACKEND",
                    format!("unknown backend '{}'", other),
                ))
            }
        };

        let gcp_project_id = match (storage_backend, lookup("GCP_PROJECT_ID")) {
            (_, Some(project)) => project,
            (StorageBackend::Firestore, None) => return Err(ConfigError::Missing("GCP_PROJECT_ID")),
            (StorageBackend::Memory, None) => "local-dev".to_string(),
        };

        Ok(Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            storage_backend,
            gcp_project_id,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("Config should load");

        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.gcp_project_id, "local-dev");
    }

    #[test]
    fn test_firestore_requires_project() {
        let err = config_from(&[("STORAGE_BACKEND", "firestore")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GCP_PROJECT_ID")));

        let config = config_from(&[
            ("STORAGE_BACKEND", "Firestore"),
            ("GCP_PROJECT_ID", "tracker-prod"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Firestore);
        assert_eq!(config.gcp_project_id, "tracker-prod");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = config_from(&[("STORAGE_BACKEND", "mongodb")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("STORAGE_BACKEND", _)));
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(config.port, 3000);
    }
}
