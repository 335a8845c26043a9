//! Shared types, configuration and trend aggregation for newsgauge.

pub mod app_config;
pub mod config;
pub mod error;
pub mod trend;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use trend::{aggregate, aggregate_dated};
pub use types::{ArticleRecord, DateSource, EntitySets, ExportRow, TrendPoint};
