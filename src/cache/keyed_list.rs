//! Keyed List Module
//!
//! Doubly linked list of keys stored in a slot arena and linked by index,
//! paired with a key → slot index so any key can be unlinked in O(1).
//!
//! ```text
//!   index: { "a" -> 0, "b" -> 2, "c" -> 1 }
//!
//!   head ─► [0: a] ◄──► [2: b] ◄──► [1: c] ◄── tail
//! ```
//!
//! Freed slots are recycled through a free list, so the arena never grows
//! past the largest number of keys held at once.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Keyed List ==
/// Ordered set of keys with O(1) push, pop, move and remove-by-key.
///
/// - Front = oldest (next eviction candidate)
/// - Back = newest
#[derive(Debug, Clone)]
pub struct KeyedList<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    index: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K> KeyedList<K>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with arena room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Push Back ==
    /// Appends `key` at the back.
    ///
    /// Returns `false` and leaves the order untouched if the key is already
    /// linked.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let node = Node {
            key: key.clone(),
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.index.insert(key, slot);
        self.attach_back(slot);
        true
    }

    // == Move To Back ==
    /// Moves an existing key to the back; returns `false` if it is not linked.
    pub fn move_to_back<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.index.get(key) else {
            return false;
        };
        if self.tail != Some(slot) {
            self.detach(slot);
            self.attach_back(slot);
        }
        true
    }

    // == Pop Front ==
    /// Unlinks and returns the front key.
    pub fn pop_front(&mut self) -> Option<K> {
        let slot = self.head?;
        let key = self.release(slot)?;
        self.index.remove(&key);
        Some(key)
    }

    // == Remove ==
    /// Unlinks `key`; returns `false` if it was not linked.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.remove(key) {
            Some(slot) => self.release(slot).is_some(),
            None => false,
        }
    }

    // == Front ==
    /// Returns the front key without unlinking it.
    pub fn front(&self) -> Option<&K> {
        self.head
            .and_then(|slot| self.slots[slot].as_ref())
            .map(|node| &node.key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates keys from front to back.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn release(&mut self, slot: usize) -> Option<K> {
        self.detach(slot);
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        Some(node.key)
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = match self.slots[slot].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(node) = self.slots[prev].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next) => {
                if let Some(node) = self.slots[next].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_back(&mut self, slot: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(tail) => {
                if let Some(node) = self.slots[tail].as_mut() {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }
}

impl<K> Default for KeyedList<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`KeyedList`].
pub struct Iter<'a, K> {
    list: &'a KeyedList<K>,
    current: Option<usize>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.slots[self.current?].as_ref()?;
        self.current = node.next;
        Some(&node.key)
    }
}
