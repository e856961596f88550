//! Shared Cache Handle
//!
//! A cloneable, thread-safe handle over [`MemoCache`]. The core cache is
//! single-writer by construction; hosts with real parallelism hold one of
//! these instead, which guards the storage map with a `RwLock`.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use crate::cache::{CacheEntry, MemoCache};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::logger::Logger;

// == Shared Cache ==
/// Thread-safe handle to a [`MemoCache`].
///
/// Cloning the handle aliases the same underlying cache. Reads return owned
/// clones of the stored values, so `V: Clone` is required.
pub struct SharedCache<K, V, C = SystemClock> {
    inner: Arc<RwLock<MemoCache<K, V, C>>>,
}

impl<K, V> SharedCache<K, V, SystemClock>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
{
    /// Creates a new shared cache on the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::from_cache(MemoCache::new(config))
    }
}

impl<K, V, C> SharedCache<K, V, C>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
    C: Clock,
{
    /// Wraps an existing cache in a shared handle.
    pub fn from_cache(cache: MemoCache<K, V, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Stores a key-value pair with the configured default TTL.
    pub fn add(&self, key: K, value: V) -> Result<()> {
        self.inner.write().unwrap().add(key, value)
    }

    /// Stores a key-value pair expiring `ttl_ms` milliseconds from now.
    pub fn add_with_ttl(&self, key: K, value: V, ttl_ms: i64) -> Result<()> {
        self.inner.write().unwrap().add_with_ttl(key, value, ttl_ms)
    }

    /// Retrieves the value for `key` if present and not expired.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().unwrap().get(key).cloned()
    }

    /// Retrieves the full entry for `key` if present and not expired.
    pub fn get_entry(&self, key: &K) -> Option<CacheEntry<V>> {
        self.inner.read().unwrap().get_entry(key).cloned()
    }

    /// Retrieves the raw entry for `key` regardless of expiration.
    pub fn peek_entry(&self, key: &K) -> Option<CacheEntry<V>> {
        self.inner.read().unwrap().peek_entry(key).cloned()
    }

    /// Removes the entry for `key`, returning its value if one was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().unwrap().remove(key)
    }

    /// Removes all entries unconditionally.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }

    /// Returns the raw number of occupied slots, expired entries included.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Returns true if no slots are occupied.
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }

    /// Returns true if an entry exists for `key` and has not expired.
    pub fn is_valid(&self, key: &K) -> bool {
        self.inner.read().unwrap().is_valid(key)
    }

    /// Returns true if a slot limit is configured and every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.inner.read().unwrap().is_full()
    }

    /// Sets or clears the slot limit.
    pub fn set_max_slots(&self, limit: Option<usize>) {
        self.inner.write().unwrap().set_max_slots(limit);
    }

    /// Replaces the diagnostic sink.
    pub fn set_logger(&self, logger: Box<dyn Logger>) {
        self.inner.write().unwrap().set_logger(logger);
    }
}

impl<K, V, C> Clone for SharedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
