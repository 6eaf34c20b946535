//! Caching layer for park data.
//!
//! queue-times.com refreshes roughly every five minutes, so the parsed
//! response is kept for that long and every page load in between is served
//! from memory. Expiry is checked on read; failed fetches are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use crate::queue_times::{FetchError, ParkFeed, ParkResponse};

/// Parc Astérix on queue-times.com.
pub const PARC_ASTERIX_ID: u32 = 9;

/// Maximum length of an error message written to the log.
const MAX_LOGGED_ERROR: usize = 200;

/// Cached park entry.
type ParkEntry = Arc<ParkResponse>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Park to fetch; also the cache key.
    pub park_id: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
            max_capacity: 16,
            park_id: PARC_ASTERIX_ID,
        }
    }
}

/// Park feed with caching.
///
/// Wraps a [`ParkFeed`] and memoizes successful responses for the
/// configured TTL.
pub struct CachedParkFeed<F> {
    feed: F,
    parks: MokaCache<u32, ParkEntry>,
    park_id: u32,
}

impl<F: ParkFeed> CachedParkFeed<F> {
    /// Create a new cached feed.
    pub fn new(feed: F, config: &CacheConfig) -> Self {
        let parks = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            feed,
            parks,
            park_id: config.park_id,
        }
    }

    /// Get the park data, using the cache if a fresh entry exists.
    pub async fn fetch(&self) -> Result<ParkEntry, FetchError> {
        if let Some(cached) = self.parks.get(&self.park_id).await {
            debug!(park_id = self.park_id, "serving park data from cache");
            return Ok(cached);
        }

        debug!(park_id = self.park_id, "cache miss, fetching park data");
        let entry = Arc::new(self.feed.fetch_park(self.park_id).await?);

        self.parks.insert(self.park_id, entry.clone()).await;

        Ok(entry)
    }

    /// Get the park data, or an empty park if upstream failed.
    ///
    /// The failure is logged and swallowed so the page always renders.
    pub async fn fetch_or_empty(&self) -> ParkEntry {
        match self.fetch().await {
            Ok(entry) => entry,
            Err(e) => {
                let message: String = e.to_string().chars().take(MAX_LOGGED_ERROR).collect();
                warn!(park_id = self.park_id, error = %message, "failed to fetch park data");
                Arc::new(ParkResponse::empty())
            }
        }
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.parks.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.parks.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue_times::{MockParkFeed, RideDto};

    fn park(name: &str, wait_time: u32) -> ParkResponse {
        ParkResponse {
            rides: vec![RideDto {
                id: None,
                name: name.to_string(),
                wait_time,
                is_open: true,
                last_updated: None,
            }],
            lands: vec![],
            last_updated: Some("2024-01-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.park_id, 9);
    }

    #[test]
    fn cache_creation() {
        let feed = MockParkFeed::new(park("Toutatis", 30));
        let cached = CachedParkFeed::new(feed, &CacheConfig::default());
        assert_eq!(cached.cache_entry_count(), 0);
    }

    #[tokio::test]
    async fn repeated_fetch_is_served_from_cache() {
        let feed = MockParkFeed::new(park("Toutatis", 30));
        let cached = CachedParkFeed::new(feed.clone(), &CacheConfig::default());

        let first = cached.fetch().await.unwrap();

        // Upstream changes, but the cached copy is still fresh.
        feed.set_response(park("Toutatis", 90)).await;
        let second = cached.fetch().await.unwrap();

        assert_eq!(feed.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.rides[0].wait_time, 30);
    }

    #[tokio::test]
    async fn expired_entry_is_refetched() {
        let feed = MockParkFeed::new(park("Toutatis", 30));
        let config = CacheConfig {
            ttl: Duration::from_millis(50),
            ..CacheConfig::default()
        };
        let cached = CachedParkFeed::new(feed.clone(), &config);

        cached.fetch().await.unwrap();
        feed.set_response(park("Toutatis", 90)).await;
        tokio::time::sleep(Duration::from_millis(150)).await;

        let refreshed = cached.fetch().await.unwrap();
        assert_eq!(feed.calls(), 2);
        assert_eq!(refreshed.rides[0].wait_time, 90);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let feed = MockParkFeed::new(park("Goudurix", 10));
        let cached = CachedParkFeed::new(feed.clone(), &CacheConfig::default());

        cached.fetch().await.unwrap();
        cached.invalidate_cache();
        cached.fetch().await.unwrap();

        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test]
    async fn failure_falls_back_to_empty_park() {
        let feed = MockParkFeed::failing(500);
        let cached = CachedParkFeed::new(feed.clone(), &CacheConfig::default());

        let park = cached.fetch_or_empty().await;
        assert_eq!(*park, ParkResponse::empty());
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let feed = MockParkFeed::failing(500);
        let cached = CachedParkFeed::new(feed.clone(), &CacheConfig::default());

        assert!(cached.fetch().await.is_err());
        feed.set_response(park("OzIris", 25)).await;

        let park = cached.fetch_or_empty().await;
        assert_eq!(feed.calls(), 2);
        assert_eq!(park.rides[0].name, "OzIris");
    }
}
