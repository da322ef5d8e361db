//! Cloud context configuration.
//!
//! The subscription id and management endpoint come from `.gantry.toml`,
//! overridable per invocation by `--subscription` and the
//! `GANTRY_SUBSCRIPTION` / `GANTRY_ENDPOINT` environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{GantryError, Result};

const CONFIG_FILE: &str = ".gantry.toml";

/// Default ARM management endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GantryConfig {
    #[serde(default)]
    pub cloud: CloudConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CloudConfig {
    pub subscription: Option<String>,
    pub endpoint: Option<String>,
}

impl GantryConfig {
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Load `.gantry.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Resolved per-invocation cloud context.
///
/// The subscription is optional at construction so commands that never
/// build a fully-qualified id still run without one.
#[derive(Debug, Clone)]
pub struct CloudContext {
    subscription: Option<String>,
    pub endpoint: String,
}

impl CloudContext {
    /// Resolve the context from flag > environment > config file.
    pub fn resolve(subscription_flag: Option<String>) -> Result<Self> {
        let config = GantryConfig::load()?;
        let subscription = subscription_flag
            .or_else(|| std::env::var("GANTRY_SUBSCRIPTION").ok())
            .or(config.cloud.subscription);
        let endpoint = std::env::var("GANTRY_ENDPOINT")
            .ok()
            .or(config.cloud.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            subscription,
            endpoint,
        })
    }

    /// The current subscription id, or a config error naming what is missing.
    pub fn subscription(&self) -> Result<&str> {
        self.subscription
            .as_deref()
            .ok_or_else(|| GantryError::Config("no subscription id configured".to_string()))
    }
}

#[cfg(test)]
impl CloudContext {
    pub(crate) fn for_tests(subscription: Option<&str>) -> Self {
        Self {
            subscription: subscription.map(str::to_string),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
