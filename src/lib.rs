//! Memo Cache - an in-process key-value cache with TTL expiration
//! and slot-bounded admission.
//!
//! Expiration is lazy: entries are checked against the clock when read and
//! are never swept in the background. When a slot limit is configured, a
//! full cache refuses new admissions instead of evicting.
//!
//! ```
//! use memo_cache::{CacheConfig, MemoCache};
//!
//! let mut cache = MemoCache::new(CacheConfig::default());
//! cache.add("session".to_string(), "token".to_string()).unwrap();
//! assert_eq!(cache.get(&"session".to_string()), Some(&"token".to_string()));
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod logger;

pub use cache::{CacheEntry, MemoCache, SharedCache, DEFAULT_TTL_MS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use logger::{Logger, MemoryLogger, TracingLogger};
