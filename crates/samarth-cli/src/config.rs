//! CLI configuration, loadable from TOML or environment.

use std::path::Path;

use serde::Deserialize;

use samarth_data::ProviderConfig;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "samarth.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Top-level configuration for the `samarth` binary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_format: LogFormat,
    /// Data backend settings. Optional — defaults to the mock provider.
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path`, or `samarth.toml` when present, or the defaults; then
    /// apply environment overrides.
    ///
    /// An explicit path that can't be read is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.provider = config.provider.with_env_overrides();
        Ok(config)
    }
}
