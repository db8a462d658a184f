//! LFU Policy
//!
//! Evicts the key with the lowest access count. Among equally frequent keys
//! the one touched longest ago goes first.
//!
//! Every insert and access stamps the key with a value from a per-policy
//! clock that only moves forward, so `(frequency, last_touched)` is unique per
//! key. The ranking index is ordered by that pair, which makes the victim
//! simply its first entry. Each operation is O(log n).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::cache::policy::{EvictionPolicy, PolicyKind};

/// Per-key usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Usage {
    frequency: u64,
    last_touched: u64,
}

impl Usage {
    fn rank(&self) -> (u64, u64) {
        (self.frequency, self.last_touched)
    }
}

// == LFU Policy ==
#[derive(Debug, Clone)]
pub struct LfuPolicy<K> {
    usage: HashMap<K, Usage>,
    ranking: BTreeMap<(u64, u64), K>,
    clock: u64,
}

impl<K> LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            usage: HashMap::with_capacity(capacity),
            ranking: BTreeMap::new(),
            clock: 0,
        }
    }

    /// Returns the access count recorded for `key`.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.usage.get(key).map(|usage| usage.frequency)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl<K> Default for LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn on_insert(&mut self, key: &K) {
        let usage = Usage {
            frequency: 1,
            last_touched: self.tick(),
        };
        if let Some(previous) = self.usage.insert(key.clone(), usage) {
            self.ranking.remove(&previous.rank());
        }
        self.ranking.insert(usage.rank(), key.clone());
    }

    fn on_access(&mut self, key: &K) {
        let now = self.tick();
        let Some(usage) = self.usage.get_mut(key) else {
            return;
        };

        let Some(ranked_key) = self.ranking.remove(&usage.rank()) else {
            return;
        };
        usage.frequency += 1;
        usage.last_touched = now;
        self.ranking.insert(usage.rank(), ranked_key);
    }

    fn select_victim(&mut self) -> K {
        let (_, key) = self
            .ranking
            .pop_first()
            .expect("select_victim called on an empty LFU policy");
        self.usage.remove(&key);
        key
    }

    fn remove(&mut self, key: &K) {
        if let Some(usage) = self.usage.remove(key) {
            self.ranking.remove(&usage.rank());
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.usage.contains_key(key)
    }

    fn len(&self) -> usize {
        self.usage.len()
    }

    fn victim_order(&self) -> Vec<K> {
        self.ranking.values().cloned().collect()
    }
}
