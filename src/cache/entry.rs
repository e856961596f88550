//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use serde::Serialize;

// == Cache Entry ==
/// A stored value paired with its expiration timestamp.
///
/// Entries are pure data: they never read the clock themselves. Expiry
/// checks take the current time as an argument so the owning cache is the
/// single time source.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` after `now_ms`.
    ///
    /// A zero or negative TTL produces an entry that is already expired.
    pub fn new(value: V, now_ms: i64, ttl_ms: i64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired once the current time reaches
    /// its expiration time. A TTL of zero is therefore invalid immediately,
    /// even within the millisecond it was stored in.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds as of `now_ms`,
    /// clamped at zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: i64) -> i64 {
        (self.expires_at - now_ms).max(0)
    }
}
