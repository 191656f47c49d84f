//! CLI configuration, loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use hc_context::{DispatchConfig, ProcessorConfig};

/// Top-level configuration for `hc-interpret`.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// JSON file holding the hub's `devices` and `rooms` arrays. Relative
    /// paths are resolved against the config file's directory.
    pub inventory_path: PathBuf,
    #[serde(default)]
    pub processor: ProcessorConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl CliConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.processor.validate()?;
        config.dispatch.validate()?;
        if let Some(dir) = Path::new(path).parent() {
            config.inventory_path = dir.join(&config.inventory_path);
        }
        Ok(config)
    }
}
