//! Thread-safe memo caches for path decoding, joining and segment quoting.
//!
//! Entries are computed outside the lock and stored afterwards. Two threads
//! racing on the same key both compute an equal value and the second store
//! overwrites the first, so a race costs redundant work but never produces a
//! wrong result.

use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

/// Capacity used for the decode and join caches unless configured otherwise.
pub const DEFAULT_PATH_CACHE_CAPACITY: usize = 1000;

/// Capacity used for the segment-quoting cache unless configured otherwise.
pub const DEFAULT_SEGMENT_CACHE_CAPACITY: usize = 10_000;

/// Eviction policy for a [`PathCache`].
///
/// # Examples
///
/// ```
/// use modelwalk::cache::CachePolicy;
///
/// let policy = CachePolicy::lru(1000);
/// assert_eq!(policy.capacity(), Some(1000));
/// assert_eq!(CachePolicy::lru(0), CachePolicy::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Never evict. Memory grows with the number of distinct keys seen.
    Unbounded,
    /// Evict the least-recently-used entry once `capacity` is reached.
    Lru {
        /// Maximum number of entries.
        capacity: NonZeroUsize,
    },
}

impl CachePolicy {
    /// LRU policy with the given capacity; a capacity of zero means unbounded.
    #[must_use]
    pub fn lru(capacity: usize) -> Self {
        NonZeroUsize::new(capacity).map_or(Self::Unbounded, |capacity| Self::Lru { capacity })
    }

    /// The maximum number of entries, or `None` when unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Lru { capacity } => Some(capacity.get()),
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::lru(DEFAULT_PATH_CACHE_CAPACITY)
    }
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compute a value.
    pub misses: u64,
    /// Entries currently stored.
    pub len: usize,
}

/// A concurrent memo cache keyed by the raw input of a path computation.
///
/// # Examples
///
/// ```
/// use modelwalk::cache::{CachePolicy, PathCache};
///
/// let cache: PathCache<String, usize> = PathCache::new(CachePolicy::lru(2));
/// let len = cache
///     .get_or_try_insert_with("abc", || Ok::<_, ()>(3))
///     .unwrap();
/// assert_eq!(len, 3);
/// assert_eq!(cache.get("abc"), Some(3));
/// ```
#[derive(Debug)]
pub struct PathCache<K: Hash + Eq, V> {
    policy: CachePolicy,
    entries: Mutex<LruCache<K, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> PathCache<K, V> {
    /// Create an empty cache with the given eviction policy.
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        let entries = match policy {
            CachePolicy::Unbounded => LruCache::unbounded(),
            CachePolicy::Lru { capacity } => LruCache::new(capacity),
        };
        Self {
            policy,
            entries: Mutex::new(entries),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The eviction policy this cache was built with.
    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Look up a value, marking it as recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.lock().get(key).cloned()
    }

    /// Store a value, evicting the least-recently-used entry if full.
    pub fn insert(&self, key: K, value: V) {
        self.entries.lock().put(key, value);
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held. Errors are returned as-is and
    /// nothing is cached for them.
    ///
    /// # Errors
    ///
    /// Returns whatever error `compute` returns.
    pub fn get_or_try_insert_with<Q, E, F>(&self, key: &Q, compute: F) -> Result<V, E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> Result<V, E>,
    {
        let cached = self.get(key);
        if let Some(value) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute()?;
        self.insert(key.to_owned(), value.clone());
        Ok(value)
    }

    /// Infallible form of [`get_or_try_insert_with`](Self::get_or_try_insert_with).
    pub fn get_or_insert_with<Q, F>(&self, key: &Q, compute: F) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute();
        self.insert(key.to_owned(), value.clone());
        value
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Current hit/miss counters and size.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: self.len(),
        }
    }
}
