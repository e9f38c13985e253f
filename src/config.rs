//! Product list configuration persistence
//!
//! Stores preferences in `~/.config/cartlist/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::SelectorMode;

/// Product list configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListConfig {
    /// Group each availability section by product department
    #[serde(default)]
    pub group_by_department: bool,

    /// Show +/- buttons beside the free-text quantity field
    #[serde(default)]
    pub quantity_buttons: bool,

    /// Preferred quantity selector for small quantities
    #[serde(default)]
    pub selector: SelectorMode,

    /// Lowest quantity a decrement step can reach (0 or 1)
    #[serde(default)]
    pub decrement_floor: i64,
}

impl Default for ProductListConfig {
    fn default() -> Self {
        Self {
            group_by_department: false,
            quantity_buttons: false,
            selector: SelectorMode::Dropdown,
            decrement_floor: 0,
        }
    }
}

impl ProductListConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
