//! LRU Policy
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::fmt;
use std::hash::Hash;

use crate::cache::keyed_list::KeyedList;
use crate::cache::policy::{EvictionPolicy, PolicyKind};

// == LRU Policy ==
/// Tracks access order for LRU eviction.
///
/// Keys are stored in a `KeyedList` where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Both inserts and accesses are O(1); an access unlinks the key and relinks
/// it at the back instead of rebuilding the order.
#[derive(Debug, Clone)]
pub struct LruPolicy<K> {
    /// Order of keys by access time
    order: KeyedList<K>,
}

impl<K> LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new empty LRU policy.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: KeyedList::with_capacity(capacity),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, linking it if it is new.
    fn touch(&mut self, key: &K) {
        if !self.order.move_to_back(key) {
            self.order.push_back(key.clone());
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }
}

impl<K> Default for LruPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Eq + Hash + Clone + fmt::Debug + Send,
{
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_insert(&mut self, key: &K) {
        self.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        // Untracked keys are not resurrected by an access
        self.order.move_to_back(key);
    }

    fn select_victim(&mut self) -> K {
        self.order
            .pop_front()
            .expect("select_victim called on an empty LRU policy")
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
    fn test_lru_new() {
        let lru: LruPolicy<&str> = LruPolicy::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_insert_new_keys() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some(&"key1"));
    }

    #[test]
    fn test_lru_access_existing_key() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        lru.on_access(&"key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"key2"));
    }

    #[test]
    fn test_lru_access_untracked_key_is_ignored() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_access(&"ghost");

        assert_eq!(lru.len(), 1);
        assert!(!lru.contains(&"ghost"));
    }

    #[test]
    fn test_lru_select_victim() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        assert_eq!(lru.select_victim(), "key1");
        assert_eq!(lru.len(), 2);

        assert_eq!(lru.select_victim(), "key2");
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key2");
        lru.on_insert(&"key3");

        lru.remove(&"key2");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&"key2"));
        assert!(lru.contains(&"key1"));
        assert!(lru.contains(&"key3"));
    }

    #[test]
    fn test_lru_order_after_multiple_accesses() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"a");
        lru.on_insert(&"b");
        lru.on_insert(&"c");

        // front=[a, b, c]=back, then a, c, b are touched in turn
        lru.on_access(&"a");
        lru.on_access(&"c");
        lru.on_access(&"b");

        assert_eq!(lru.victim_order(), vec!["a", "c", "b"]);
        assert_eq!(lru.select_victim(), "a");
        assert_eq!(lru.select_victim(), "c");
        assert_eq!(lru.select_victim(), "b");
    }

    #[test]
    fn test_lru_insert_same_key_multiple_times() {
        let mut lru = LruPolicy::new();

        lru.on_insert(&"key1");
        lru.on_insert(&"key1");
        lru.on_insert(&"key1");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.select_victim(), "key1");
        assert!(lru.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty LRU policy")]
    fn test_lru_select_victim_on_empty_panics() {
        let mut lru: LruPolicy<&str> = LruPolicy::new();
        lru.select_victim();
    }
}
