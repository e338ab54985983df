//! Expiring Cache Module
//!
//! TTL layer over [`RecencyCache`]: entries older than the configured
//! time-to-live read as misses.

use std::hash::Hash;
use std::time::Duration;

use crate::cache::{RecencyCache, TimestampedEntry};
use crate::config::CacheConfig;
use crate::error::Result;

// == Expiring Cache ==
/// Capacity-bounded cache whose entries expire a fixed duration after they
/// are written.
///
/// Storage, recency order, and capacity eviction are delegated entirely to
/// an inner [`RecencyCache`]; this layer stamps values on write and masks
/// stale entries on read. The two eviction forces are independent: a full
/// cache can evict a fresh entry, and an expired entry occupies its slot
/// until a read or a [`cleanup`](Self::cleanup) sweep removes it.
#[derive(Debug)]
pub struct ExpiringCache<K, V> {
    /// Underlying recency-ordered storage
    inner: RecencyCache<K, TimestampedEntry<V>>,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl<K: Eq + Hash + Clone, V> ExpiringCache<K, V> {
    // == Constructor ==
    /// Creates a cache bounded to `capacity` entries, each valid for `ttl`
    /// after its last write.
    ///
    /// # Errors
    /// Returns `CacheError::ZeroCapacity` when `capacity` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Ok(Self {
            inner: RecencyCache::new(capacity)?,
            ttl,
        })
    }

    /// Creates a cache from a validated config.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity, config.ttl)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired; a hit refreshes the
    /// entry's recency position but never its age. An expired entry is
    /// removed so it does not linger, and reads as a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let expired = match self.inner.peek(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => return None,
        };

        if expired {
            self.inner.delete(key);
            return None;
        }

        self.inner.get(key).map(|entry| &entry.value)
    }

    // == Set ==
    /// Stores a key-value pair, stamping it with the current instant.
    ///
    /// A fresh write discards any previous TTL clock for the key and
    /// restarts it.
    pub fn set(&mut self, key: K, value: V) {
        self.inner.set(key, TimestampedEntry::new(value));
    }

    // == Has ==
    /// Checks whether a key is logically present.
    ///
    /// Applies the same expiry check as `get` but mutates nothing: an
    /// expired entry reports false while still occupying its slot until a
    /// `get` or `cleanup` removes it. Recency order is untouched.
    pub fn has(&self, key: &K) -> bool {
        match self.inner.peek(key) {
            Some(entry) => !entry.is_expired(self.ttl),
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it was physically present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.inner.delete(key)
    }

    // == Clear ==
    /// Empties the cache.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // == Cleanup ==
    /// Removes every expired entry and returns the number removed.
    ///
    /// Purely reclaims capacity early: future `get`/`has` results are
    /// identical whether or not the sweep has run.
    pub fn cleanup(&mut self) -> usize {
        let expired_keys: Vec<K> = self
            .inner
            .entries()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.inner.delete(key);
        }

        count
    }

    // == Length ==
    /// Returns the physical entry count.
    ///
    /// Expired entries keep their slots until a read or a sweep removes
    /// them, so this can exceed the number of logically valid entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries, expired or not.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    // == TTL ==
    /// Returns the time-to-live applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
