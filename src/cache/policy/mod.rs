//! Eviction Policy Module
//!
//! Defines the capability every eviction strategy implements and the
//! `PolicyKind` selector used to build one at cache construction time.

mod fifo;
mod lfu;
mod lru;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

// == Eviction Policy ==
/// Tracks the order/frequency metadata needed to pick an eviction victim.
///
/// The owning cache keeps the policy's key set identical to its own: every
/// key passed to `on_insert` stays tracked until it is returned by
/// `select_victim` or dropped through `remove`.
pub trait EvictionPolicy<K>: fmt::Debug + Send {
    /// The variant this policy implements.
    fn kind(&self) -> PolicyKind;

    /// Registers a newly inserted key.
    fn on_insert(&mut self, key: &K);

    /// Records a hit or an overwrite of a tracked key.
    fn on_access(&mut self, key: &K);

    /// Removes and returns the key that should be evicted next.
    ///
    /// # Panics
    /// Panics if no key is tracked. The cache only calls this when it is at
    /// capacity, so an empty policy means the cache's bookkeeping is broken.
    fn select_victim(&mut self) -> K;

    /// Stops tracking `key` without treating it as an eviction.
    fn remove(&mut self, key: &K);

    /// Returns true if `key` is tracked.
    fn contains(&self, key: &K) -> bool;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked keys in the order they would be evicted, next victim first.
    fn victim_order(&self) -> Vec<K>;
}

// == Policy Kind ==
/// Selects one of the built-in eviction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First in, first out
    Fifo,
    /// Least recently used
    #[default]
    Lru,
    /// Least frequently used, oldest touch breaks ties
    Lfu,
}

impl PolicyKind {
    /// Builds an empty policy of this kind sized for `capacity` keys.
    pub fn build<K>(self, capacity: usize) -> Box<dyn EvictionPolicy<K>>
    where
        K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::with_capacity(capacity)),
            PolicyKind::Lru => Box::new(LruPolicy::with_capacity(capacity)),
            PolicyKind::Lfu => Box::new(LfuPolicy::with_capacity(capacity)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(CacheError::UnknownPolicy(other.to_string())),
        }
    }
}
