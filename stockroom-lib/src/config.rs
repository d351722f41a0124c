use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Result, fs::config_dir};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "client.toml";
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Overrides [`ClientConfig::api_url`] when set.
pub const API_URL_ENV: &str = "STOCKROOM_API_URL";

/// Where to find the inventory service, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    version: u16,
    api_url: String,
}

impl ClientConfig {
    /// Load `client.toml` from the Stockroom config directory, writing the
    /// defaults there first if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("Using default client config, {} is invalid: {e}", path.display());
                Self::default()
            })
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            cfg
        };

        if let Ok(url) = env::var(API_URL_ENV) {
            cfg.api_url = url;
        }

        Ok(cfg)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn set_api_url(&mut self, url: impl Into<String>) {
        self.api_url = url.into();
    }

    pub fn version(&self) -> u16 {
        self.version
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            api_url: DEFAULT_API_URL.into(),
        }
    }
}
