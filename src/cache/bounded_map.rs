//! Bounded Map Module
//!
//! Plain key-value storage used by the cache. Capacity is enforced by the
//! owning `Cache`, not here.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

// == Bounded Map ==
/// Associative container with O(1) expected-time access.
#[derive(Debug, Clone)]
pub struct BoundedMap<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
}

impl<K, V> BoundedMap<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    // == Get ==
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the stored key together with its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    // == Set ==
    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    // == Delete ==
    /// Removes `key`, returning the stored key and value.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove_entry(key)
    }

    // == Contains ==
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K, V> Default for BoundedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_new() {
        let map: BoundedMap<String, u32> = BoundedMap::with_capacity(4);
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_set_and_get() {
        let mut map = BoundedMap::with_capacity(4);

        assert_eq!(map.set("a".to_string(), 1), None);
        assert_eq!(map.get("a"), Some(&1));
        assert!(map.contains("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_map_overwrite_returns_previous() {
        let mut map = BoundedMap::with_capacity(4);

        map.set("a".to_string(), 1);
        assert_eq!(map.set("a".to_string(), 2), Some(1));
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_map_delete() {
        let mut map = BoundedMap::with_capacity(4);

        map.set("a".to_string(), 1);
        assert_eq!(map.delete("a"), Some(("a".to_string(), 1)));
        assert!(!map.contains("a"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_delete_missing() {
        let mut map: BoundedMap<String, u32> = BoundedMap::default();
        assert_eq!(map.delete("missing"), None);
    }

    #[test]
    fn test_map_does_not_enforce_capacity() {
        let mut map = BoundedMap::with_capacity(1);

        for i in 0..10 {
            map.set(i, i * 2);
        }

        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&7), Some(&14));
    }

    #[test]
    fn test_map_get_mut() {
        let mut map = BoundedMap::with_capacity(2);

        map.set("a".to_string(), 1);
        if let Some(value) = map.get_mut("a") {
            *value = 5;
        }

        assert_eq!(map.get_key_value("a"), Some((&"a".to_string(), &5)));
    }
}
