use crate::adapters::NumbersApiClient;
use crate::core::fact_fetcher::FactFetcher;
use crate::core::{ConfigProvider, FactSource};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared request state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone; the fetcher and its cache live behind an `Arc`.
pub struct AppState<S: FactSource> {
    pub facts: Arc<FactFetcher<S>>,
    pub started_at: DateTime<Utc>,
}

impl<S: FactSource> AppState<S> {
    pub fn new(source: S, cache_capacity: usize) -> Self {
        Self {
            facts: Arc::new(FactFetcher::new(source, cache_capacity)),
            started_at: Utc::now(),
        }
    }
}

impl AppState<NumbersApiClient> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let source = NumbersApiClient::new(config.trivia_base_url())?;
        Ok(Self::new(source, config.cache_capacity()))
    }
}

impl<S: FactSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            facts: Arc::clone(&self.facts),
            started_at: self.started_at,
        }
    }
}
