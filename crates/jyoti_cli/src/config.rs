use std::path::Path;

use anyhow::{Context, Result};
use jyoti_vedic::DashaConfig;
use serde::Deserialize;
use tracing::info;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "jyoti.toml";

/// Top-level CLI configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Engine settings.
    #[serde(default)]
    pub dasha: DashaConfig,

    /// Presentation settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    /// Print JSON instead of text.
    pub json: bool,
    /// Sub-levels `dasha` expands when `--levels` is absent.
    pub levels: u8,
    /// Rows printed per level in text mode.
    pub max_rows: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            levels: 0,
            max_rows: 50,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or from `jyoti.toml` if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("failed to parse TOML config")?;
        config.dasha.validate()?;
        Ok(config)
    }
}
