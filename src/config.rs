//! Configuration loading for the attrisk CLI and library consumers.
//!
//! Configuration is loaded from TOML files with the following resolution
//! order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.attrisk/config.toml` (user)
//! 3. `/etc/attrisk/config.toml` (system)
//!
//! When no file exists and no explicit path was given, the built-in
//! defaults apply — the client must work against a local service with zero
//! setup. The service is unauthenticated, so there is no secrets layer.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::PredictClient;
use crate::{AttriskError, Result};

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Prediction service connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the prediction service (default: http://127.0.0.1:8000).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Optional request timeout in seconds. Unset means the transport's
    /// default applies.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.attrisk/config.toml`
    /// 3. `/etc/attrisk/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Config::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            AttriskError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            AttriskError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any file is present.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(AttriskError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".attrisk").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/attrisk/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Build a client from this configuration.
    pub fn client(&self) -> PredictClient {
        match self.service.request_timeout_secs {
            Some(secs) => {
                PredictClient::with_timeout(&self.service.endpoint, Duration::from_secs(secs))
            }
            None => PredictClient::with_base_url(&self.service.endpoint),
        }
    }
}
