//! Cache Store Module
//!
//! Main cache engine combining `BoundedMap` storage with a pluggable
//! eviction policy and discard notifications.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{
    BoundedMap, CacheSnapshot, CacheStats, DiscardEvent, DiscardObserver, EvictionPolicy,
    PolicyKind, SnapshotEntry, TracingObserver,
};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// Fixed-capacity key-value cache.
///
/// Holds at most `max_items` entries. Inserting a new key into a full cache
/// first evicts the victim chosen by the policy and reports it to the
/// discard observer. Overwriting an existing key never evicts.
pub struct Cache<K, V> {
    /// Key-value storage
    map: BoundedMap<K, V>,
    /// Order/frequency metadata, same key set as `map`
    policy: Box<dyn EvictionPolicy<K>>,
    /// Receives one event per eviction
    observer: Box<dyn DiscardObserver<K>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_items: usize,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache around `policy`.
    ///
    /// Discards are logged through `TracingObserver` until another observer
    /// is installed with [`Cache::with_observer`].
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `max_items` is zero.
    pub fn new(policy: Box<dyn EvictionPolicy<K>>, max_items: usize) -> Result<Self> {
        if max_items == 0 {
            return Err(CacheError::InvalidCapacity(max_items));
        }

        debug!(policy = %policy.kind(), max_items, "Cache created");
        Ok(Self {
            map: BoundedMap::with_capacity(max_items),
            policy,
            observer: Box::new(TracingObserver),
            stats: CacheStats::new(),
            max_items,
        })
    }

    /// Creates an empty cache with a built-in policy.
    pub fn with_kind(kind: PolicyKind, max_items: usize) -> Result<Self> {
        Self::new(kind.build(max_items), max_items)
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_kind(config.policy, config.max_items)
    }

    /// Replaces the discard observer.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: DiscardObserver<K> + 'static,
    {
        self.observer = Box::new(observer);
        self
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing key has its value replaced and counts as an access. A new
    /// key arriving at a full cache evicts one entry first.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(slot) = self.map.get_mut(&key) {
            *slot = value;
            self.policy.on_access(&key);
            return;
        }

        if self.map.len() >= self.max_items {
            self.evict();
        }

        self.policy.on_insert(&key);
        self.map.set(key, value);
        self.stats.set_total_entries(self.map.len());

        debug_assert!(self.map.len() <= self.max_items);
        debug_assert_eq!(self.map.len(), self.policy.len());
    }

    /// Stores a pair whose parts may be absent.
    ///
    /// If either part is `None` nothing is stored and no metadata changes.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => self.stats.record_rejected(),
        }
    }

    // == Get ==
    /// Retrieves a value by key, recording the access with the policy.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get_key_value(key) {
            Some((stored_key, value)) => {
                self.policy.on_access(stored_key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Retrieves a value for a key that may be absent.
    ///
    /// A `None` key returns `None` without touching any state.
    pub fn get_opt<Q>(&mut self, key: Option<&Q>) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match key {
            Some(key) => self.get(key),
            None => {
                self.stats.record_rejected();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry. Not an eviction: no discard event is emitted.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (key, value) = self.map.delete(key)?;
        self.policy.remove(&key);
        self.stats.set_total_entries(self.map.len());
        Some(value)
    }

    // == Contains ==
    /// Checks presence without counting as an access.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Keys in the order they would be evicted, next victim first.
    pub fn eviction_order(&self) -> Vec<K> {
        self.policy.victim_order()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.map.len());
        stats
    }

    /// Returns true if the map and the policy track exactly the same keys
    /// and the capacity bound holds.
    pub fn is_consistent(&self) -> bool {
        self.map.len() <= self.max_items
            && self.map.len() == self.policy.len()
            && self.map.iter().all(|(key, _)| self.policy.contains(key))
    }

    fn evict(&mut self) {
        let victim = self.policy.select_victim();
        self.map.delete(&victim);
        self.stats.record_eviction();
        debug!(evicted_key = ?victim, policy = %self.policy.kind(), "Evicted entry");
        self.observer.on_discard(&DiscardEvent::new(victim));
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Ord + fmt::Debug + Send + 'static,
    V: Clone,
{
    // == Snapshot ==
    /// Copies the current contents, sorted by key.
    pub fn snapshot(&self) -> CacheSnapshot<K, V> {
        let mut entries: Vec<SnapshotEntry<K, V>> = self
            .map
            .iter()
            .map(|(key, value)| SnapshotEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheSnapshot {
            policy: self.policy.kind(),
            max_items: self.max_items,
            entries,
            eviction_order: self.policy.victim_order(),
            stats: self.stats(),
        }
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("map", &self.map)
            .field("policy", &self.policy)
            .field("stats", &self.stats)
            .field("max_items", &self.max_items)
            .finish_non_exhaustive()
    }
}
