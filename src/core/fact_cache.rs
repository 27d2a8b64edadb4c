use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Bounded, thread-safe LRU map from integer to fetched fact text.
///
/// Only successful lookups are stored here; the fetcher never inserts a
/// placeholder.
pub struct FactCache {
    inner: Mutex<LruCache<i64, String>>,
}

impl FactCache {
    /// A capacity of zero is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Returns the cached fact and marks it most recently used.
    pub fn get(&self, number: i64) -> Option<String> {
        self.inner.lock().get(&number).cloned()
    }

    /// Inserts or overwrites, evicting the least recently used entry when full.
    pub fn put(&self, number: i64, fact: String) {
        if let Some((evicted, _)) = self.inner.lock().push(number, fact) {
            if evicted != number {
                tracing::debug!("Evicted fun fact for {} from cache", evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}

impl Default for FactCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_and_put() {
        let cache = FactCache::new(10);
        assert!(cache.is_empty());
        assert_eq!(cache.get(42), None);

        cache.put(42, "42 is the answer.".to_string());
        assert_eq!(cache.get(42), Some("42 is the answer.".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = FactCache::new(3);
        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());
        cache.put(3, "three".to_string());

        // touch 1 so 2 becomes the eviction candidate
        assert_eq!(cache.get(1), Some("one".to_string()));

        cache.put(4, "four".to_string());

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(2), None);
        assert_eq!(cache.get(1), Some("one".to_string()));
        assert_eq!(cache.get(3), Some("three".to_string()));
        assert_eq!(cache.get(4), Some("four".to_string()));
    }

    #[test]
    fn test_overwrite_is_idempotent() {
        let cache = FactCache::new(2);
        cache.put(7, "seven".to_string());
        cache.put(7, "seven".to_string());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(7), Some("seven".to_string()));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = FactCache::new(0);
        assert_eq!(cache.capacity(), 1);
        assert_eq!(FactCache::default().capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_concurrent_writers() {
        let cache = Arc::new(FactCache::new(100));
        let handles: Vec<_> = (0..8i64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..50i64 {
                        let key = t * 50 + i;
                        cache.put(key, format!("fact {}", key));
                        let _ = cache.get(key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 100);
    }
}
