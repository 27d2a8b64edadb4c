use crate::core::fact_cache::FactCache;
use crate::domain::ports::FactSource;
use crate::utils::error::FactError;
use std::time::Duration;

/// Upper bound for a single outbound fact lookup.
pub const FACT_TIMEOUT: Duration = Duration::from_secs(2);

/// Memoizing front for a [`FactSource`].
///
/// Lookups never fail from the caller's point of view: every failure mode is
/// turned into a placeholder sentence, and only successful facts are cached.
pub struct FactFetcher<S: FactSource> {
    source: S,
    cache: FactCache,
}

impl<S: FactSource> FactFetcher<S> {
    pub fn new(source: S, cache_capacity: usize) -> Self {
        Self {
            source,
            cache: FactCache::new(cache_capacity),
        }
    }

    pub async fn get_fun_fact(&self, number: i64) -> String {
        if let Some(fact) = self.cache.get(number) {
            tracing::debug!("Fun fact cache hit for {}", number);
            return fact;
        }

        tracing::debug!("Fun fact cache miss for {}, querying source", number);
        // This bound holds for every FactSource; NumbersApiClient's own
        // client timeout uses the same FACT_TIMEOUT and only reclassifies
        // the failure as FactError::Timeout a little earlier.
        let outcome = match tokio::time::timeout(FACT_TIMEOUT, self.source.fetch(number)).await {
            Ok(result) => result,
            Err(_) => Err(FactError::Timeout),
        };

        match outcome {
            Ok(fact) => {
                self.cache.put(number, fact.clone());
                fact
            }
            Err(e) => {
                tracing::warn!("Fun fact lookup for {} failed: {}", number, e);
                e.placeholder()
            }
        }
    }

    pub fn cache(&self) -> &FactCache {
        &self.cache
    }
}
