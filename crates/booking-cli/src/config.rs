//! CLI configuration file

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Settings read from the optional `--config` YAML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set (e.g. `info`, `booking_mapping=debug`)
    pub log_level: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid configuration")
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
