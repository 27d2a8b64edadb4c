pub mod classifier;
pub mod fact_cache;
pub mod fact_fetcher;
pub mod predicates;

pub use crate::domain::model::{ClassificationResult, Property};
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
