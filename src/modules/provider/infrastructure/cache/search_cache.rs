use crate::modules::movie::MovieRecord;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<MovieRecord>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(data: Vec<MovieRecord>, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
    pub expired_removals: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Memoizes normalized search results per exact query text for a fixed TTL.
///
/// Only successful searches are stored. Expired entries are dropped lazily on
/// lookup; when full, the oldest entries are evicted.
#[derive(Debug)]
pub struct SearchCache {
    cache: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
    ttl: Duration,
    max_entries: usize,
}

impl SearchCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expired: AtomicU64::new(0),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// A zero TTL turns caching off
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Get cached results if present and not expired
    pub fn get(&self, query: &str) -> Option<Vec<MovieRecord>> {
        if !self.is_enabled() {
            return None;
        }

        if let Some(entry) = self.cache.get(query) {
            if !entry.is_expired() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for query: {}", query);
                return Some(entry.data.clone());
            }
        }

        // Remove after the read guard is released
        if self
            .cache
            .remove_if(query, |_, entry| entry.is_expired())
            .is_some()
        {
            self.expired.fetch_add(1, Ordering::Relaxed);
            debug!("Removed expired cache entry for query: {}", query);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for query: {}", query);
        None
    }

    /// Cache results for `query`
    pub fn insert(&self, query: &str, results: Vec<MovieRecord>) {
        if !self.is_enabled() {
            return;
        }

        if self.cache.len() >= self.max_entries && !self.cache.contains_key(query) {
            self.evict_oldest_entries();
        }

        self.cache
            .insert(query.to_string(), CacheEntry::new(results, self.ttl));
        debug!(
            "Cached results for query: {} with TTL: {:?}",
            query, self.ttl
        );
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.cache.len(),
            expired_removals: self.expired.load(Ordering::Relaxed),
        }
    }

    /// Evict oldest entries until the cache is back to 90% of capacity
    fn evict_oldest_entries(&self) {
        let current_size = self.cache.len();

        let mut entries: Vec<(String, Instant)> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();
        entries.sort_by_key(|(_, created_at)| *created_at);

        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        for (key, _) in entries.into_iter().take(to_evict) {
            self.cache.remove(&key);
        }

        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            to_evict,
            current_size,
            self.cache.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(title: &str) -> Vec<MovieRecord> {
        vec![MovieRecord {
            title: title.to_string(),
            ..MovieRecord::default()
        }]
    }

    #[test]
    fn test_store_and_retrieve() {
        let cache = SearchCache::new(Duration::from_secs(300), 10);
        cache.insert("Dune", records("Dune"));

        assert_eq!(cache.get("Dune"), Some(records("Dune")));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries_count, 1);
    }

    #[test]
    fn test_key_is_exact_query_text() {
        let cache = SearchCache::new(Duration::from_secs(300), 10);
        cache.insert("Dune", records("Dune"));
        assert!(cache.get("dune").is_none());
        assert!(cache.get("Dune ").is_none());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = SearchCache::new(Duration::from_millis(20), 10);
        cache.insert("Dune", records("Dune"));
        std::thread::sleep(Duration::from_millis(40));

        assert!(cache.get("Dune").is_none());
        let stats = cache.stats();
        assert_eq!(stats.entries_count, 0);
        assert_eq!(stats.expired_removals, 1);
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let cache = SearchCache::new(Duration::ZERO, 10);
        cache.insert("Dune", records("Dune"));
        assert!(!cache.is_enabled());
        assert!(cache.get("Dune").is_none());
        assert_eq!(cache.stats().entries_count, 0);
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let cache = SearchCache::new(Duration::from_secs(300), 3);
        for q in ["a", "b", "c"] {
            cache.insert(q, records(q));
            std::thread::sleep(Duration::from_millis(2));
        }
        cache.insert("d", records("d"));

        assert!(cache.stats().entries_count <= 3);
        assert!(cache.get("a").is_none());
        assert!(cache.get("d").is_some());
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..CacheStats::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
