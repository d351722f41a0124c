use std::{fs, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use stockroom_lib::fs::config_dir;
use tracing::warn;

pub use crate::config::theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

/// Handle to the front end's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The front end's configuration, serialized to TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    pub version: u16,
    pub theme: Theme,
}

impl GuiConfig {
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(FILE_NAME),
            Err(e) => {
                warn!("Using default GUI config: {e}");
                return Self::default();
            }
        };

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|contents| toml::from_str(&contents).ok())
                .unwrap_or_else(|| {
                    warn!("Ignoring unreadable {}", path.display());
                    Self::default()
                })
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    /// Write the config back to disk. Failures are logged; the GUI keeps running.
    pub fn save(&self) {
        let result = toml::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|contents| {
                let dir = config_dir().map_err(|e| e.to_string())?;
                fs::write(dir.join(FILE_NAME), contents).map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            warn!("Could not save GUI config: {e}");
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
        }
    }
}
