//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
///
/// Misses are not errors: `get`/`has` on an absent or expired key return
/// `None`/`false`. The only failure mode is a configuration error surfaced
/// at construction time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero
    #[error("Cache capacity must be greater than zero")]
    ZeroCapacity,
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;
