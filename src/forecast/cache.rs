use super::nws::FetchError;
use super::types::{Coordinate, ForecastDocument};
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

type CoordKey = (u64, u64);

struct CacheEntry {
    document: ForecastDocument,
    expires_at: DateTime<Utc>,
}

struct CacheInner {
    entries: HashMap<CoordKey, CacheEntry>,
    order: VecDeque<CoordKey>,
}

/// Time- and capacity-bounded store of fetched forecast documents, keyed by
/// the exact coordinate pair. Expiry is lazy: entries are only checked and
/// dropped on read or insert, never swept in the background.
pub struct ForecastCache {
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
    inner: Mutex<CacheInner>,
}

impl ForecastCache {
    pub fn new(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            capacity,
            clock,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Returns the cached document for this coordinate if present and still
    /// fresh. An expired entry is removed and reported as absent.
    pub fn get(&self, coordinate: &Coordinate) -> Option<ForecastDocument> {
        let key = coordinate.key();
        let now = self.clock.now();
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        match inner.entries.get(&key) {
            Some(entry) if now < entry.expires_at => Some(entry.document.clone()),
            Some(_) => {
                tracing::debug!("Cache entry expired for lat: {}, lon: {}", coordinate.latitude, coordinate.longitude);
                inner.entries.remove(&key);
                inner.order.retain(|queued| queued != &key);
                None
            }
            None => None,
        }
    }

    /// Stores a document with a fresh expiry, evicting the oldest entry
    /// first when capacity is exceeded.
    pub fn put(&self, coordinate: &Coordinate, document: ForecastDocument) {
        let key = coordinate.key();
        let expires_at = self.clock.now() + self.ttl;
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        inner.order.retain(|queued| queued != &key);
        inner.order.push_back(key);
        inner.entries.insert(key, CacheEntry { document, expires_at });

        while inner.entries.len() > self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    pub fn evict(&self, coordinate: &Coordinate) {
        let key = coordinate.key();
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        inner.entries.remove(&key);
        inner.order.retain(|queued| queued != &key);
    }

    /// Cache-aside lookup: a fresh hit skips `fetch` entirely; on miss or
    /// expiry the fetch runs and only a successful result is stored. Fetch
    /// failures are logged and reported as absence, never memoized.
    ///
    /// First population is not synchronized: two concurrent misses for the
    /// same coordinate both perform the full fetch and the last write wins.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        coordinate: &Coordinate,
        fetch: F,
    ) -> Option<ForecastDocument>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ForecastDocument, FetchError>>,
    {
        if let Some(document) = self.get(coordinate) {
            tracing::debug!(
                "Cache hit for lat: {}, lon: {}",
                coordinate.latitude,
                coordinate.longitude
            );
            return Some(document);
        }

        match fetch().await {
            Ok(document) => {
                self.put(coordinate, document.clone());
                Some(document)
            }
            Err(e) => {
                tracing::error!("Forecast fetch failed: {}", e);
                None
            }
        }
    }
}
