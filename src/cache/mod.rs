//! Gram-entry cache
//!
//! Memoizes kernel values K(p_i, p_j) between points of one point set, keyed
//! by row index. Kernels are symmetric, so only the pair with i <= j is stored.
//! The squared-radius estimator evaluates every within-set pair for the
//! centroid norm and then again for the per-point cross term; with a cache
//! large enough to hold the upper triangle the second pass is free.

use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key for kernel values, normalized so that i <= j
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey {
    i: usize,
    j: usize,
}

impl PairKey {
    fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { i, j }
        } else {
            Self { i: j, j: i }
        }
    }
}

/// LRU cache of Gram matrix entries for a single point set
pub struct KernelCache {
    cache: LruCache<PairKey, f64>,
    hits: u64,
    misses: u64,
}

impl KernelCache {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache for a set of `n_points`, capped at `max_entries`
    ///
    /// A set of n points has n(n+1)/2 distinct entries, so no more are ever
    /// allocated than the set can fill.
    pub fn for_point_set(n_points: usize, max_entries: usize) -> Self {
        Self::new(upper_triangle_len(n_points).min(max_entries))
    }

    /// Look up K(p_i, p_j)
    pub fn get(&mut self, i: usize, j: usize) -> Option<f64> {
        match self.cache.get(&PairKey::new(i, j)) {
            Some(&value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store K(p_i, p_j)
    pub fn put(&mut self, i: usize, j: usize, value: f64) {
        self.cache.put(PairKey::new(i, j), value);
    }

    /// Return the cached value for (i, j) or compute and store it
    pub fn get_or_compute<F: FnOnce() -> f64>(&mut self, i: usize, j: usize, compute: F) -> f64 {
        if let Some(value) = self.get(i, j) {
            return value;
        }
        let value = compute();
        self.put(i, j, value);
        value
    }

    /// Fraction of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            capacity: self.cache.cap().get(),
            size: self.cache.len(),
        }
    }
}

/// Number of distinct symmetric pairs (diagonal included) among `n` points
pub fn upper_triangle_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub capacity: usize,
    pub size: usize,
}
