use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bounded, thread-safe memo for a single pure `&str -> String` transformation.
///
/// Least recently used entries are evicted once `capacity` distinct inputs are held. A capacity
/// of `0` disables the cache and every call runs the transformation.
pub struct TransformCache {
    entries: Option<Mutex<LruCache<String, String>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl TransformCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|capacity| Mutex::new(LruCache::new(capacity))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns the cached output for `input`, running `transform` on a miss.
    pub fn get_or_insert_with<F>(&self, input: &str, transform: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let Some(entries) = &self.entries else {
            return transform(input);
        };

        if let Some(cached) = entries.lock().get(input) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        // Unlocked while transforming; concurrent misses on one input produce identical outputs.
        let output = transform(input);
        entries.lock().put(input.to_string(), output.clone());

        output
    }

    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        let (entries, capacity) = match &self.entries {
            Some(entries) => {
                let entries = entries.lock();
                (entries.len(), entries.cap().get())
            }
            None => (0, 0),
        };

        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
            capacity,
        }
    }
}
