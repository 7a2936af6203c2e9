//! Configuration loading and representation.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `config/stockroom.toml` (optional)
//! 3. `STOCKROOM__*` environment variables, e.g. `STOCKROOM__STORAGE__BACKEND=memory`

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/stockroom";
const ENV_PREFIX: &str = "STOCKROOM";

/// Slot key used by the original browser client.
pub const DEFAULT_SLOT_KEY: &str = "inventoryItems";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit.
    Memory,
    /// JSON file slot on disk.
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub slot_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: PathBuf::from("data"),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StockroomConfig {
    pub storage: StorageConfig,
    pub http: HttpConfig,
}

impl StockroomConfig {
    /// Load from `config/stockroom.toml` (optional) and `STOCKROOM__` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("__")
                        .separator("__"),
                ),
        )
    }

    /// Load from an explicit TOML document (no environment overlay).
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder().add_source(File::from_str(toml, config::FileFormat::Toml)),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let cfg = builder.build()?.try_deserialize::<StockroomConfig>()?;
        if cfg.storage.slot_key.trim().is_empty() {
            return Err(ConfigError::Message("storage.slot_key cannot be empty".to_string()));
        }
        Ok(cfg)
    }
}
