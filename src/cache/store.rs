// In-memory response cache with TTL checking.
// Entries are overwritten when stale, never evicted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// TTL for trending search responses: 10 minutes.
pub const TRENDING_TTL: Duration = Duration::from_secs(10 * 60);

/// Wrapper for cached data with the time it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub timestamp: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: DateTime<Utc>) -> Self {
        Self { data, timestamp }
    }

    /// Age of the entry at `now`. Entries stamped in the future count as fresh.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.timestamp)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Check if this entry has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) >= ttl
    }
}

/// Keyed store of upstream responses.
///
/// Implementations must not hold internal locks across an `.await`; callers
/// look up, fetch, then put, so two concurrent misses on one key may both fetch.
pub trait ResponseCache<T: Clone> {
    /// Entry stored under `key`, fresh or not.
    fn get(&self, key: &str) -> Option<CacheEntry<T>>;

    /// Store an entry, replacing anything already under `key`.
    fn put(&self, key: &str, entry: CacheEntry<T>);

    /// Whether the entry is still usable at `now`.
    fn is_valid(&self, entry: &CacheEntry<T>, now: DateTime<Utc>) -> bool;

    /// Data under `key` if present and not stale.
    fn lookup(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        self.get(key)
            .filter(|entry| self.is_valid(entry, now))
            .map(|entry| entry.data)
    }
}

/// Process-local cache backed by a `HashMap`.
#[derive(Debug)]
pub struct MemoryCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T> MemoryCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of keys ever stored (stale entries included).
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new(TRENDING_TTL)
    }
}

impl<T: Clone> ResponseCache<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        self.entries().get(key).cloned()
    }

    fn put(&self, key: &str, entry: CacheEntry<T>) {
        self.entries().insert(key.to_string(), entry);
    }

    fn is_valid(&self, entry: &CacheEntry<T>, now: DateTime<Utc>) -> bool {
        !entry.is_expired(self.ttl, now)
    }
}
