//! Configuration Module
//!
//! Construction parameters for a cache instance. There is deliberately no
//! environment-variable surface: the owning scope builds a config and passes
//! it explicitly to the cache it constructs.

use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache construction parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Time-to-live for each entry, measured from its last write
    pub ttl: Duration,
    /// Interval between background expiry sweeps
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with the given capacity and TTL, keeping the default
    /// sweep interval.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// A zero capacity is rejected rather than silently behaving as
    /// capacity-1 or unbounded.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl: Duration::from_secs(300),
            cleanup_interval: Duration::from_secs(1),
        }
    }
}
