//! Indexed binary min-heap with in-place priority updates.
//!
//! `BinaryHeap` cannot change the priority of an element already inside it,
//! so decrease-key would need lazy deletion and stale-entry skipping, which
//! breaks the "at most one entry per state" invariant of the frontier. This
//! heap keeps a key → slot map instead, giving `O(log n)` update and removal.

use std::collections::HashMap;
use std::hash::Hash;

/// A min-heap of `(key, priority)` entries, at most one entry per key.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K, P> {
    entries: Vec<(K, P)>,
    positions: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone, P: Ord> IndexedHeap<K, P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&P> {
        self.positions.get(key).map(|&i| &self.entries[i].1)
    }

    /// The minimum entry.
    #[must_use]
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.entries.first().map(|(k, p)| (k, p))
    }

    /// Insert `key`, or change its priority if already present.
    ///
    /// Returns the previous priority when the key was present. The new
    /// priority may be lower or higher than the old one.
    pub fn push(&mut self, key: K, priority: P) -> Option<P> {
        if let Some(&i) = self.positions.get(&key) {
            let old = std::mem::replace(&mut self.entries[i].1, priority);
            let i = self.sift_up(i);
            self.sift_down(i);
            return Some(old);
        }
        let i = self.entries.len();
        self.positions.insert(key.clone(), i);
        self.entries.push((key, priority));
        self.sift_up(i);
        None
    }

    /// Remove and return the minimum entry.
    pub fn pop(&mut self) -> Option<(K, P)> {
        self.remove_at(0)
    }

    /// Remove `key` wherever it sits.
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let i = *self.positions.get(key)?;
        self.remove_at(i).map(|(_, p)| p)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn remove_at(&mut self, i: usize) -> Option<(K, P)> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(i, last);
        let (key, priority) = self.entries.pop()?;
        self.positions.remove(&key);
        if i < self.entries.len() {
            let i = self.sift_up(i);
            self.sift_down(i);
        }
        Some((key, priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.entries[a].0) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.entries[b].0) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].1 >= self.entries[parent].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    /// Heap order and position-map consistency. Test-only audit.
    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.entries.len(), self.positions.len());
        for (i, (key, priority)) in self.entries.iter().enumerate() {
            assert_eq!(self.positions.get(key), Some(&i), "stale position");
            if i > 0 {
                let parent = (i - 1) / 2;
                assert!(self.entries[parent].1 <= *priority, "heap order broken at {i}");
            }
        }
    }
}

impl<K: Hash + Eq + Clone, P: Ord> Default for IndexedHeap<K, P> {
    fn default() -> Self {
        Self::new()
    }
}
