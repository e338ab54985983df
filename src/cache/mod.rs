//! Cache Module
//!
//! Provides in-memory caching with LRU eviction and TTL expiry.

mod entry;
mod expiring;
mod recency;


// Re-export public types
pub use entry::TimestampedEntry;
pub use expiring::ExpiringCache;
pub use recency::{Entries, RecencyCache};
