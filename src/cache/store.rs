//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy TTL expiration and
//! slot-bounded admission.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cache::CacheEntry;
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::logger::{Logger, TracingLogger};

// == Memo Cache ==
/// In-process key-value cache with per-item TTL and an optional slot limit.
///
/// Expired entries are detected when read, never removed behind the caller's
/// back: they keep occupying their slot until removed, overwritten, or
/// cleared. When the slot limit is reached, new admissions are refused and a
/// diagnostic naming the key is sent to the logger.
///
/// Each cache is an explicit instance; callers that want process-wide
/// sharing hold one (see [`SharedCache`](crate::cache::SharedCache) for a
/// thread-safe handle).
pub struct MemoCache<K, V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Maximum number of slots, `None` meaning unbounded
    max_slots: Option<usize>,
    /// TTL in milliseconds applied when the caller passes none
    default_ttl_ms: i64,
    /// Diagnostic sink for rejected admissions
    logger: Box<dyn Logger>,
    /// Time source for expiry decisions
    clock: C,
}

impl<K, V> MemoCache<K, V, SystemClock>
where
    K: Eq + Hash + fmt::Debug,
{
    // == Constructors ==
    /// Creates a new MemoCache on the system clock, logging through
    /// `tracing`.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new MemoCache with a custom diagnostic sink.
    pub fn with_logger(config: CacheConfig, logger: Box<dyn Logger>) -> Self {
        let mut cache = Self::with_clock(config, SystemClock);
        cache.logger = logger;
        cache
    }
}

impl<K, V, C> MemoCache<K, V, C>
where
    K: Eq + Hash + fmt::Debug,
    C: Clock,
{
    /// Creates a new MemoCache with a custom clock (useful for testing).
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            max_slots: config.max_slots,
            default_ttl_ms: config.default_ttl_ms,
            logger: Box::new(TracingLogger),
            clock,
        }
    }

    // == Add ==
    /// Stores a key-value pair with the configured default TTL.
    ///
    /// See [`add_with_ttl`](Self::add_with_ttl) for the admission rules.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        let ttl_ms = self.default_ttl_ms;
        self.add_with_ttl(key, value, ttl_ms)
    }

    /// Stores a key-value pair expiring `ttl_ms` milliseconds from now.
    ///
    /// If the key already exists, the value is overwritten and the TTL is
    /// reset. If the cache is full, nothing is stored: one diagnostic naming
    /// the key goes to the logger and `CacheError::SlotsFull` is returned.
    /// Fullness is judged on the raw slot count, so expired entries still
    /// block admission and an overwrite is refused while the cache is full.
    ///
    /// `ttl_ms` has no bounds; zero or negative values store an entry that
    /// is already invalid for reads.
    pub fn add_with_ttl(&mut self, key: K, value: V, ttl_ms: i64) -> Result<()> {
        if self.is_full() {
            let named = format!("{:?}", key);
            self.logger.record(&format!(
                "All slots are full. Key {} is not added to cache.",
                named
            ));
            return Err(CacheError::SlotsFull(named));
        }

        let now_ms = self.clock.now_ms();
        self.entries.insert(key, CacheEntry::new(value, now_ms, ttl_ms));
        Ok(())
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// An expired entry reads as absent, indistinguishable from a key that
    /// was never stored, but it is not removed (lazy invalidation without
    /// eviction).
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Retrieves the full entry for `key`, expiration metadata included, if
    /// present and not expired.
    pub fn get_entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        let now_ms = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now_ms))
    }

    /// Retrieves the raw entry for `key` regardless of expiration.
    ///
    /// This is the only read that can observe an expired entry, e.g. to
    /// inspect its (past) expiration timestamp.
    pub fn peek_entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Removes the entry for `key`, returning its value if one was present.
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Removes all entries unconditionally, expired or not.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Introspection ==
    /// Returns the raw number of occupied slots, expired entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no slots are occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry exists for `key` and has not expired.
    ///
    /// Unlike [`get`](Self::get) this stays usable when the stored value is
    /// itself an "empty" marker such as `None`.
    pub fn is_valid(&self, key: &K) -> bool {
        self.get_entry(key).is_some()
    }

    /// Returns true if a slot limit is configured and every slot is
    /// occupied. Always false for an unbounded cache.
    pub fn is_full(&self) -> bool {
        self.max_slots
            .map_or(false, |limit| self.entries.len() >= limit)
    }

    // == Reconfiguration ==
    /// Sets or clears the slot limit.
    ///
    /// Lowering the limit below the current count evicts nothing; it only
    /// blocks admissions until the count drops below the new limit.
    pub fn set_max_slots(&mut self, limit: Option<usize>) {
        self.max_slots = limit;
    }

    /// Replaces the diagnostic sink.
    pub fn set_logger(&mut self, logger: Box<dyn Logger>) {
        self.logger = logger;
    }
}

impl<K, V, C> fmt::Debug for MemoCache<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.entries.len())
            .field("max_slots", &self.max_slots)
            .field("default_ttl_ms", &self.default_ttl_ms)
            .finish_non_exhaustive()
    }
}
