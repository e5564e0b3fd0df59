//! Provider configuration, loadable from TOML with environment overrides.

use serde::Deserialize;

use samarth_protocol::Dataset;

use crate::data_gov::DataGovProvider;
use crate::error::DataResult;
use crate::mock::MockDataProvider;
use crate::provider::DataProvider;

/// Which backend answers data fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Simulated tables (no network).
    #[default]
    Mock,
    /// Live data.gov.in API.
    DataGov,
}

impl ProviderKind {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(Self::Mock),
            "data_gov" | "datagov" | "live" => Some(Self::DataGov),
            _ => None,
        }
    }
}

/// data.gov.in connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    /// API key (DATA_GOV_API_KEY env var takes precedence).
    #[serde(default)]
    pub api_key: String,
    /// Resource API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Resource ID of the annual rainfall dataset.
    #[serde(default = "default_rainfall_resource_id")]
    pub rainfall_resource_id: String,
    /// Resource ID of the district-wise crop production dataset.
    #[serde(default = "default_crop_production_resource_id")]
    pub crop_production_resource_id: String,
    /// Maximum rows requested per fetch.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.data.gov.in/resource".into()
}
fn default_rainfall_resource_id() -> String {
    "8e0bd482-4aba-4d99-9cb9-ff124f6f1c2f".into()
}
fn default_crop_production_resource_id() -> String {
    "35985678-0d79-46b4-9ed6-6f13308a1d24".into()
}
fn default_limit() -> u32 {
    1000
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            api_key: String::new(),
            base_url: default_base_url(),
            rainfall_resource_id: default_rainfall_resource_id(),
            crop_production_resource_id: default_crop_production_resource_id(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Apply DATA_GOV_API_KEY and SAMARTH_PROVIDER from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("DATA_GOV_API_KEY").ok(),
            std::env::var("SAMARTH_PROVIDER").ok(),
        )
    }

    fn with_overrides(mut self, api_key: Option<String>, kind: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = key;
        }
        if let Some(raw) = kind {
            match ProviderKind::parse(&raw) {
                Some(kind) => self.kind = kind,
                None => tracing::warn!(value = %raw, "ignoring unknown SAMARTH_PROVIDER"),
            }
        }
        self
    }

    pub fn resource_id(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Agriculture => &self.crop_production_resource_id,
            Dataset::Climate => &self.rainfall_resource_id,
        }
    }

    /// Public catalogue URL for a dataset, cited in answers.
    pub fn source_label(&self, dataset: Dataset) -> String {
        format!("https://data.gov.in/resource/{}", self.resource_id(dataset))
    }
}

/// Build the provider selected by `config.kind`.
pub fn build_provider(config: &ProviderConfig) -> DataResult<Box<dyn DataProvider>> {
    match config.kind {
        ProviderKind::Mock => Ok(Box::new(MockDataProvider::new().with_labels_from(config))),
        ProviderKind::DataGov => Ok(Box::new(DataGovProvider::new(config.clone())?)),
    }
}
