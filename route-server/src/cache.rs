//! Caching layer for extracted route segments.
//!
//! Provider calls are slow and rate limited, so every extracted segment is
//! cached for a short, fixed time under a key derived from the normalized
//! request. Entries are never deleted explicitly; they simply expire.
//!
//! The store itself is behind [`CacheStore`] so the orchestrator does not care
//! whether bytes live in-process ([`MokaStore`]) or in an external key-value
//! service.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::SearchRequest;

/// Namespace prefix for every segment key.
pub const KEY_PREFIX: &str = "train_path";

/// Separator between key fields. Not escaped inside field values.
pub const KEY_DELIMITER: char = ':';

/// Default lifetime of a cached segment (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache key for a route segment.
///
/// Layout: `train_path:{train}:{departure}:{arrival}:{day}:{month}`, with
/// station names already normalized and day/month written without leading
/// zeros.
///
/// # Examples
///
/// ```
/// use route_server::cache::CacheKey;
///
/// let key = CacheKey::build("016А", "москва", "санкт-петербург", 15, 3);
/// assert_eq!(key.as_str(), "train_path:016А:москва:санкт-петербург:15:3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build a key from the five request fields, in this order.
    pub fn build(
        train_number: &str,
        departure_station: &str,
        arrival_station: &str,
        day: u8,
        month: u8,
    ) -> Self {
        let d = KEY_DELIMITER;
        Self(format!(
            "{KEY_PREFIX}{d}{train_number}{d}{departure_station}{d}{arrival_station}{d}{day}{d}{month}"
        ))
    }

    /// Build the key for a validated request.
    pub fn for_request(request: &SearchRequest) -> Self {
        Self::build(
            request.train_number(),
            request.departure_station(),
            request.arrival_station(),
            request.day(),
            request.month(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key-value store with per-entry time-to-live.
///
/// Implementations must be safe to share between concurrent requests.
/// Expired entries must read as absent.
pub trait CacheStore: Send + Sync {
    /// Read the bytes stored under `key`, if present and not expired.
    fn get(&self, key: &str) -> impl Future<Output = Option<Vec<u8>>> + Send;

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> impl Future<Output = ()> + Send;
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached segments.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_capacity: 10_000,
        }
    }
}

/// Stored bytes together with the TTL they were written with.
#[derive(Clone)]
struct Entry {
    bytes: Arc<[u8]>,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        // A rewrite restarts the clock
        Some(value.ttl)
    }
}

/// In-process [`CacheStore`] backed by moka.
#[derive(Clone)]
pub struct MokaStore {
    entries: MokaCache<String, Entry>,
}

impl MokaStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { entries }
    }
}

impl CacheStore for MokaStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let found = self.entries.get(key).await;
        debug!(key, found = found.is_some(), "cache lookup");
        found.map(|entry| entry.bytes.to_vec())
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) {
        debug!(key, ttl_secs = ttl.as_secs(), bytes = value.len(), "cache set");
        let entry = Entry {
            bytes: value.into(),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;
    }
}
