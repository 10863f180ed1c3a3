//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application configuration for the ordering server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Whether to populate the menu with sample items on startup
    #[serde(default = "default_seed_menu")]
    pub seed_menu: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_seed_menu() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Default configuration for local development
    pub fn default_config() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_menu: default_seed_menu(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
