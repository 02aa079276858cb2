use lru::LruCache;
use parking_lot::Mutex;
use serde::{Serialize, Deserialize};
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Ranked results keyed by normalized query
///
/// Any mutation of the owning index must call `clear`, so a hit is always
/// identical to recomputing the search.
pub struct QueryCache<T> {
    cache: Mutex<LruCache<String, Vec<T>>>,
    size_limit: usize,
    hit_count: AtomicUsize,
    miss_count: AtomicUsize,
}

impl<T: Clone + Eq + Hash> QueryCache<T> {
    /// Returns `None` for a zero capacity (cache disabled)
    pub fn new(size_limit: usize) -> Option<Self> {
        let cap = NonZeroUsize::new(size_limit)?;
        Some(QueryCache {
            cache: Mutex::new(LruCache::new(cap)),
            size_limit,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        })
    }

    pub fn get(&self, key: &str) -> Option<Vec<T>> {
        let mut cache = self.cache.lock();
        if let Some(results) = cache.get(key) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            Some(results.clone())
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn put(&self, key: String, results: Vec<T>) {
        self.cache.lock().put(key, results);
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.cache.lock().len(),
            capacity: self.size_limit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
