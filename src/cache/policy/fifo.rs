//! FIFO Policy
//!
//! Evicts keys in pure insertion order. Accesses never reorder anything.

use std::fmt;
use std::hash::Hash;

use crate::cache::keyed_list::KeyedList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == FIFO Policy ==
/// Keys are kept front-to-back in insertion order; the front is evicted.
#[derive(Debug, Clone)]
pub struct FifoPolicy<K> {
    order: KeyedList<K>,
}

impl<K> FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: KeyedList::with_capacity(capacity),
        }
    }
}

impl<K> Default for FifoPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_insert(&mut self, key: &K) {
        // A key that is already queued keeps its original position
        self.order.push_back(key.clone());
    }

    fn on_access(&mut self, _key: &K) {}

    fn select_victim(&mut self) -> K {
        self.order
            .pop_front()
            .expect("select_victim called on an empty FIFO policy")
    }

    fn remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn victim_order(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_evicts_in_insertion_order() {
        let mut fifo = FifoPolicy::new();

        fifo.on_insert(&"a");
        fifo.on_insert(&"b");
        fifo.on_insert(&"c");

        assert_eq!(fifo.select_victim(), "a");
        assert_eq!(fifo.select_victim(), "b");
        assert_eq!(fifo.select_victim(), "c");
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_fifo_ignores_access() {
        let mut fifo = FifoPolicy::new();

        fifo.on_insert(&"a");
        fifo.on_insert(&"b");
        fifo.on_access(&"a");
        fifo.on_access(&"a");

        assert_eq!(fifo.victim_order(), vec!["a", "b"]);
        assert_eq!(fifo.select_victim(), "a");
    }

    #[test]
    fn test_fifo_reinsert_keeps_position() {
        let mut fifo = FifoPolicy::new();

        fifo.on_insert(&"a");
        fifo.on_insert(&"b");
        fifo.on_insert(&"a");

        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.victim_order(), vec!["a", "b"]);
    }

    #[test]
    fn test_fifo_remove() {
        let mut fifo = FifoPolicy::new();

        fifo.on_insert(&"a");
        fifo.on_insert(&"b");
        fifo.remove(&"a");

        assert!(!fifo.contains(&"a"));
        assert_eq!(fifo.select_victim(), "b");
    }

    #[test]
    #[should_panic(expected = "empty FIFO policy")]
    fn test_fifo_select_victim_on_empty_panics() {
        let mut fifo: FifoPolicy<&str> = FifoPolicy::new();
        fifo.select_victim();
    }
}
