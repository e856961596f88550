//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// The only failure mode a cache operation has is admission rejection; every
/// other operation is total and reports "absent" through `Option` instead.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Admission rejected because every slot is occupied
    #[error("all slots are full: {0}")]
    SlotsFull(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
