//! Data providers for Samarth.
//!
//! Provides the `DataProvider` boundary the answer router reads records
//! through, a deterministic `MockDataProvider` that simulates the
//! data.gov.in crop-production and rainfall tables, and `DataGovProvider`
//! for the live API. Every provider collapses backend failures to an empty
//! record list.

pub mod config;
pub mod data_gov;
pub mod error;
pub mod mock;
pub mod provider;

// Re-export key types for convenience
pub use config::{ProviderConfig, ProviderKind, build_provider};
pub use data_gov::DataGovProvider;
pub use error::{DataError, DataResult};
pub use mock::MockDataProvider;
pub use provider::{DataProvider, RecordFilter};
