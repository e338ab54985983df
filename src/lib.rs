//! Recency Cache - a bounded in-memory cache library
//!
//! Provides LRU eviction ([`RecencyCache`]) and a TTL expiry layer on top of
//! it ([`ExpiringCache`]).

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{ExpiringCache, RecencyCache, TimestampedEntry};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
