// Cache module for upstream API responses.
// Keeps parsed responses in process memory behind a small get/put/is-valid interface.

pub mod store;

pub use store::{CacheEntry, MemoryCache, ResponseCache, TRENDING_TTL};
