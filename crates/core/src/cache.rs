//! Per-entity memoization with optional expiry.
//!
//! `MemoCell` backs a catalogue entry's two lazy caches (page body,
//! resolved name). A cell is populated at most once per lifetime unless a
//! TTL is configured or `invalidate` is called. The initializer runs while
//! the cell's lock is held, so concurrent first callers share a single
//! in-flight computation instead of racing duplicate fetches.

use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Cached value with the instant it was stored.
struct Entry<T> {
    value: T,
    stored_at: Instant,
}

impl<T> Entry<T> {
    fn is_expired(&self, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => self.stored_at.elapsed() > ttl,
            None => false,
        }
    }
}

/// Lazily populated cache slot with optional expiry.
pub struct MemoCell<T> {
    slot: Mutex<Option<Entry<T>>>,
    ttl: Option<Duration>,
}

impl<T: Clone> MemoCell<T> {
    /// Cell that caches forever once populated.
    pub fn new() -> Self {
        Self { slot: Mutex::new(None), ttl: None }
    }

    /// Cell whose value expires `ttl` after it was stored.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { slot: Mutex::new(None), ttl: Some(ttl) }
    }

    /// Cell with an optional expiry; `None` caches forever.
    pub fn with_policy(ttl: Option<Duration>) -> Self {
        Self { slot: Mutex::new(None), ttl }
    }

    /// Return the cached value, or run `init` to produce and store one.
    ///
    /// The lock is held across `init`, so at most one initializer is in
    /// flight per cell at any time; concurrent callers wait and then see
    /// the freshly stored value.
    pub async fn get_or_init<F, Fut>(&self, init: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref()
            && !entry.is_expired(self.ttl)
        {
            return entry.value.clone();
        }

        let value = init().await;
        *slot = Some(Entry { value: value.clone(), stored_at: Instant::now() });
        value
    }

    /// Discard the cached value, if any.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// Current cached value without triggering population.
    pub async fn peek(&self) -> Option<T> {
        let slot = self.slot.lock().await;
        slot.as_ref().filter(|entry| !entry.is_expired(self.ttl)).map(|entry| entry.value.clone())
    }
}

impl<T: Clone> Default for MemoCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
