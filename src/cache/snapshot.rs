//! Cache Snapshot Module
//!
//! Point-in-time copy of a cache's contents for printing and serialization.

use std::fmt;

use serde::Serialize;

use crate::cache::{CacheStats, PolicyKind};

/// A single key-value pair inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry<K, V> {
    pub key: K,
    pub value: V,
}

// == Cache Snapshot ==
/// Contents of a cache with entries sorted by key.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot<K, V> {
    pub policy: PolicyKind,
    pub max_items: usize,
    pub entries: Vec<SnapshotEntry<K, V>>,
    /// Keys in the order the policy would evict them, next victim first
    pub eviction_order: Vec<K>,
    pub stats: CacheStats,
}

impl<K, V> CacheSnapshot<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the snapshot's keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|entry| &entry.key)
    }
}

/// Renders `Current cache:` followed by one `key: value` line per entry.
impl<K, V> fmt::Display for CacheSnapshot<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}
