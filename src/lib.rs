pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::NumbersApiClient;
pub use app::{build_router, serve, AppState};
pub use config::ServiceConfig;
pub use crate::core::classifier::classify;
pub use crate::core::fact_fetcher::FactFetcher;
pub use domain::model::{ClassificationResult, Property};
pub use utils::error::{ClassifierError, FactError, Result};
