//! In-memory resource cache keyed by `href`.
//!
//! The [`Cache`] holds the last-known field mapping of every resource the
//! owning [`Client`](crate::Client) fetched or saved. It is an explicit value
//! held by the client, so two clients never see each other's entries.
//!
//! Entries never expire unless a TTL is configured with
//! [`StormpathConfigBuilder::cache_ttl`](crate::StormpathConfigBuilder::cache_ttl).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Hit and miss counters for a [`Cache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that returned an entry.
    pub hits: u64,
    /// Lookups that found nothing (or an expired entry).
    pub misses: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fields: Map<String, Value>,
    stored_at: Instant,
}

/// A resource cache mapping `href` to its last-known fields.
#[derive(Debug, Default)]
pub struct Cache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Option<Duration>,
    hits: AtomicU64,
    misses: AtomicU64,
}

// Verify Cache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cache>();
};

impl Cache {
    /// Creates an empty cache. `None` disables expiry.
    #[must_use]
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Returns the cached fields for `href`.
    pub async fn get(&self, href: &str) -> Option<Map<String, Value>> {
        let found = {
            let entries = self.entries.read().await;
            entries
                .get(href)
                .filter(|entry| self.is_fresh(entry))
                .map(|entry| entry.fields.clone())
        };

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("cache hit: {}", href);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("cache miss: {}", href);
        }
        found
    }

    /// Stores `fields` under `href`, replacing any previous entry.
    pub async fn put(&self, href: &str, fields: Map<String, Value>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            href.to_string(),
            CacheEntry {
                fields,
                stored_at: Instant::now(),
            },
        );
    }

    /// Removes the entry for `href`.
    pub async fn delete(&self, href: &str) {
        self.entries.write().await.remove(href);
    }

    /// Removes every entry. Statistics are kept.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Returns the number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns the hit/miss counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.ttl.map_or(true, |ttl| entry.stored_at.elapsed() < ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HREF: &str = "https://api.stormpath.com/v1/applications/abc";

    fn fields(name: &str) -> Map<String, Value> {
        json!({"href": HREF, "name": name}).as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_put_then_get_returns_fields() {
        let cache = Cache::new(None);
        cache.put(HREF, fields("app")).await;

        let cached = cache.get(HREF).await.unwrap();
        assert_eq!(cached.get("name"), Some(&json!("app")));
    }

    #[tokio::test]
    async fn test_put_overwrites_entry() {
        let cache = Cache::new(None);
        cache.put(HREF, fields("old")).await;
        cache.put(HREF, fields("new")).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(
            cache.get(HREF).await.unwrap().get("name"),
            Some(&json!("new"))
        );
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let cache = Cache::new(None);
        cache.put(HREF, fields("app")).await;
        cache.put("https://api.stormpath.com/v1/directories/x", fields("dir")).await;

        cache.delete(HREF).await;
        assert!(cache.get(HREF).await.is_none());
        assert_eq!(cache.len().await, 1);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_stats_count_hits_and_misses() {
        let cache = Cache::new(None);
        assert!(cache.get(HREF).await.is_none());
        cache.put(HREF, fields("app")).await;
        assert!(cache.get(HREF).await.is_some());
        assert!(cache.get(HREF).await.is_some());

        assert_eq!(cache.stats(), CacheStats { hits: 2, misses: 1 });
    }

    #[tokio::test]
    async fn test_expired_entries_are_misses() {
        let cache = Cache::new(Some(Duration::from_millis(10)));
        cache.put(HREF, fields("app")).await;

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(cache.get(HREF).await.is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_caches_are_independent() {
        let first = Cache::new(None);
        let second = Cache::new(None);
        first.put(HREF, fields("app")).await;

        assert!(second.get(HREF).await.is_none());
    }
}
