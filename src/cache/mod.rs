//! Cache Module
//!
//! Provides in-memory caching with lazy TTL expiration and slot-bounded
//! admission.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::SharedCache;
pub use store::MemoCache;

// == Public Constants ==
/// Default time in milliseconds that an item is stored before expiring
pub const DEFAULT_TTL_MS: i64 = 1000;
