//! Configuration module
//!
//! ```toml
//! [store]
//! packs = ["facts.txt"]
//!
//! [chat]
//! prompt = "> "
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    /// Directory of the loaded config file; relative pack paths resolve here
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Fact packs preloaded before every command
    #[serde(default)]
    pub packs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Config {
    /// Load from an explicit path if given, otherwise from default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .factpacks/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(".factpacks").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Per-user config path (e.g. ~/.config/factpacks/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "factpacks").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Configured packs, relative paths resolved against the config file
    pub fn pack_paths(&self) -> Vec<PathBuf> {
        self.store
            .packs
            .iter()
            .map(|pack| match &self.base_dir {
                Some(base) if pack.is_relative() => base.join(pack),
                _ => pack.clone(),
            })
            .collect()
    }
}
