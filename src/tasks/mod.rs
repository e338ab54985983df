//! Background Tasks Module
//!
//! Contains background tasks a cache owner can run alongside the cache.
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired cache entries at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
