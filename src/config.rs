//! # Configuration
//! `AppConfig` comes from an optional TOML file with env-var overrides on top:
//! 1. `$TOXIGUARD_CONFIG_PATH` (must exist if set)
//! 2. `config/toxiguard.toml` if present
//! 3. built-in defaults
//! then `TOXIGUARD_MODEL_PATH` / `TOXIGUARD_BIND_ADDR` override single fields.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/toxiguard.toml";

pub const ENV_CONFIG_PATH: &str = "TOXIGUARD_CONFIG_PATH";
pub const ENV_MODEL_PATH: &str = "TOXIGUARD_MODEL_PATH";
pub const ENV_BIND_ADDR: &str = "TOXIGUARD_BIND_ADDR";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Path of the trained model artifact.
    pub model_path: PathBuf,
    /// Directory served at `/` (the demo page).
    pub static_dir: PathBuf,
    /// Maximum retained history entries.
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            model_path: PathBuf::from("abuse_model.json"),
            static_dir: PathBuf::from("static"),
            history_capacity: 2000,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from env + files + defaults.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let path = PathBuf::from(p);
            if !path.exists() {
                bail!("{ENV_CONFIG_PATH} points to non-existent path {}", path.display());
            }
            Self::from_file(&path)?
        } else {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Self::from_file(default)?
            } else {
                Self::default()
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(p) = std::env::var(ENV_MODEL_PATH) {
            self.model_path = PathBuf::from(p);
        }
        if let Ok(a) = std::env::var(ENV_BIND_ADDR) {
            self.bind_addr = a;
        }
    }
}
