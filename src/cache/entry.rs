//! Cache Entry Module
//!
//! Defines the timestamped wrapper stored by the expiring cache.

use std::time::{Duration, Instant};

// == Timestamped Entry ==
/// A value paired with the instant it was written.
///
/// The timestamp is stamped once at construction and never refreshed: reads
/// update an entry's recency position, not its age.
#[derive(Debug, Clone)]
pub struct TimestampedEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant the value was written
    pub created_at: Instant,
}

impl<V> TimestampedEntry<V> {
    // == Constructor ==
    /// Wraps a value, stamping it with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age strictly exceeds
    /// the TTL; an entry whose age equals the TTL is still valid.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    // == Age ==
    /// Returns the time elapsed since the value was written.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Time To Live ==
    /// Returns the remaining lifetime under the given TTL, saturating at
    /// zero once the entry has expired.
    pub fn ttl_remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age())
    }
}
