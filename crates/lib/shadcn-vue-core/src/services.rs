use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use shadcn_vue_catalog::{CacheStats, ComponentMetadata};
use tokio::sync::RwLock;
use tracing::debug;

const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const DEFAULT_MAX_ENTRIES: usize = 100;
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);
const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for the component metadata cache.
#[derive(Debug, Clone, Copy)]
pub struct MetadataCacheConfig {
    pub ttl: Option<Duration>,
    pub max_entries: usize,
    pub sweep_interval: Duration,
}

impl MetadataCacheConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ttl: Some(DEFAULT_TTL),
            max_entries: DEFAULT_MAX_ENTRIES,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    /// Sets the maximum entry age. `None` keeps entries until evicted for space.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub const fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Sets how often the sweeper runs. A zero interval becomes one second.
    #[must_use]
    pub const fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = non_zero_interval(sweep_interval);
        self
    }
}

const fn non_zero_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        MIN_SWEEP_INTERVAL
    } else {
        interval
    }
}

impl Default for MetadataCacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache of extracted component metadata keyed by component name.
#[derive(Clone)]
pub struct MetadataCache {
    inner: Arc<MetadataCacheInner>,
}

/// Internal cache state shared across clones.
struct MetadataCacheInner {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: MetadataCacheConfig,
}

/// Cached metadata and the moment it was stored.
struct CacheEntry {
    metadata: Arc<Vec<ComponentMetadata>>,
    cached_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Option<Duration>, now: Instant) -> bool {
        ttl.is_some_and(|ttl| now.saturating_duration_since(self.cached_at) > ttl)
    }
}

impl MetadataCache {
    #[must_use]
    pub fn new(config: MetadataCacheConfig) -> Self {
        Self {
            inner: Arc::new(MetadataCacheInner {
                entries: RwLock::new(HashMap::new()),
                config,
            }),
        }
    }

    /// Returns cached metadata if present and not expired. Expired entries are dropped.
    pub async fn get(&self, name: &str) -> Option<Arc<Vec<ComponentMetadata>>> {
        let ttl = self.inner.config.ttl;
        let now = Instant::now();
        {
            let map = self.inner.entries.read().await;
            match map.get(name) {
                None => return None,
                Some(entry) if !entry.is_expired(ttl, now) => {
                    debug!(component = name, "metadata cache hit");
                    return Some(entry.metadata.clone());
                }
                Some(_) => {}
            }
        }

        let mut map = self.inner.entries.write().await;
        if map.get(name).is_some_and(|entry| entry.is_expired(ttl, now)) {
            map.remove(name);
            debug!(component = name, "metadata cache entry expired");
        }
        None
    }

    /// Stores metadata, evicting the oldest entry when the cache is full.
    pub async fn insert(
        &self,
        name: &str,
        metadata: Vec<ComponentMetadata>,
    ) -> Arc<Vec<ComponentMetadata>> {
        let metadata = Arc::new(metadata);
        let max_entries = self.inner.config.max_entries;
        if max_entries == 0 {
            return metadata;
        }

        let mut map = self.inner.entries.write().await;
        if !map.contains_key(name) && map.len() >= max_entries {
            let oldest = map
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                map.remove(&oldest);
                debug!(component = %oldest, "metadata cache evicted oldest entry");
            }
        }
        map.insert(
            name.to_string(),
            CacheEntry {
                metadata: metadata.clone(),
                cached_at: Instant::now(),
            },
        );
        metadata
    }

    pub async fn clear(&self) {
        self.inner.entries.write().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        let size = self.inner.entries.read().await.len();
        CacheStats {
            size,
            max_size: self.inner.config.max_entries,
            max_age_secs: self.inner.config.ttl.map(|ttl| ttl.as_secs()),
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    pub async fn evict_expired(&self) -> usize {
        let Some(ttl) = self.inner.config.ttl else {
            return 0;
        };
        let now = Instant::now();
        let mut map = self.inner.entries.write().await;
        let before = map.len();
        map.retain(|_, entry| !entry.is_expired(Some(ttl), now));
        before.saturating_sub(map.len())
    }

    /// Spawns a task that periodically evicts expired entries.
    ///
    /// Returns `None` when entries never expire.
    #[must_use]
    pub fn spawn_sweeper(self) -> Option<tokio::task::JoinHandle<()>> {
        let _ttl = self.inner.config.ttl?;
        let interval = non_zero_interval(self.inner.config.sweep_interval);
        let cache = self;
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let evicted = cache.evict_expired().await;
                if evicted > 0 {
                    debug!(evicted, "metadata cache sweep");
                }
            }
        }))
    }
}
