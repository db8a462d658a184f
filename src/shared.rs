//! Shared Cache
//!
//! Wraps a `Cache` in a single async mutex so concurrent tasks can use it.
//! The map, the policy metadata, the observer and the stats sit behind the
//! same lock, so no caller ever sees them out of step. `get` updates policy
//! metadata, which is why this is a mutex and not a read/write lock.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Mutex;

use crate::cache::{Cache, CacheSnapshot, CacheStats, ChannelObserver, DiscardEvent};
use crate::config::Config;
use crate::error::Result;

/// String-keyed cache shared across tasks. Clones share the same cache.
#[derive(Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<Cache<String, String>>>,
}

impl SharedCache {
    /// Wraps an existing cache.
    pub fn new(cache: Cache<String, String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Builds a cache from configuration whose discard events are forwarded
    /// to the returned receiver.
    pub fn from_config(config: &Config) -> Result<(Self, UnboundedReceiver<DiscardEvent<String>>)> {
        let (tx, rx) = mpsc::unbounded_channel();
        let cache = Cache::from_config(config)?.with_observer(ChannelObserver::new(tx));
        Ok((Self::new(cache), rx))
    }

    /// Stores a pair. Returns false if either part was absent.
    pub async fn put(&self, key: Option<String>, value: Option<String>) -> bool {
        let stored = key.is_some() && value.is_some();
        self.inner.lock().await.put_opt(key, value);
        stored
    }

    /// Retrieves a copy of the value stored under `key`.
    pub async fn get(&self, key: Option<&str>) -> Option<String> {
        self.inner.lock().await.get_opt(key).cloned()
    }

    /// Removes `key`; returns true if it was present.
    pub async fn delete(&self, key: &str) -> bool {
        self.inner.lock().await.delete(key).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn snapshot(&self) -> CacheSnapshot<String, String> {
        self.inner.lock().await.snapshot()
    }

    /// Returns true if the wrapped cache's invariants hold.
    pub async fn is_consistent(&self) -> bool {
        self.inner.lock().await.is_consistent()
    }
}
