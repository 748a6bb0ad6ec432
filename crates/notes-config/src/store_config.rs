//! Store configuration
//!
//! Configuration loaded from `.notes-store.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings used when building a store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Id handed to the first created note
    #[serde(default)]
    pub next_note_id: i64,

    /// Wrap dispatch with the logging middleware
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

fn default_log_actions() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            next_note_id: 0,
            log_actions: default_log_actions(),
        }
    }
}

impl StoreConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse store config")
    }

    /// Load config from the first file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded store config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default store config");
        Self::default()
    }
}
