// File: src/config.rs
//! Layered configuration: defaults -> `ecopal.toml` -> `ECOPAL_*` environment.

use crate::error::Result;
use crate::exchange::ReplyDelay;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "ecopal.toml";
const APP_DIR: &str = "ecopal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoPalConfig {
    /// Where the profile and conversation JSON files live.
    pub storage_dir: PathBuf,
    pub typing_delay_ms: u64,
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    /// Default tracing filter; `RUST_LOG` wins when set.
    pub log_level: String,
}

impl Default for EcoPalConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            typing_delay_ms: 300,
            reply_delay_min_ms: 800,
            reply_delay_max_ms: 1500,
            log_level: "warn".to_string(),
        }
    }
}

impl EcoPalConfig {
    /// Loads from the platform config directory and the environment.
    pub fn load() -> Result<Self> {
        let file = dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE));
        Self::load_from(file.as_deref())
    }

    pub fn load_from(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(EcoPalConfig::default()));
        if let Some(path) = config_file {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }
        figment = figment.merge(Env::prefixed("ECOPAL_"));
        figment.extract().map_err(|e| Box::new(e).into())
    }

    /// A fresh jittered delay for the next reply.
    pub fn reply_delay(&self) -> ReplyDelay {
        ReplyDelay::jittered(
            Duration::from_millis(self.typing_delay_ms),
            Duration::from_millis(self.reply_delay_min_ms),
            Duration::from_millis(self.reply_delay_max_ms),
        )
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
