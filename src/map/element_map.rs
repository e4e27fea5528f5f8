//! `ElementMap` — a map whose iteration order is fixed by an
//! [`ElementOrder`] policy chosen at construction.
//!
//! Unordered and insertion-ordered maps share a hashed index-map backing;
//! the unordered flavor additionally permits O(1) swap-removal. Sorted maps
//! keep their entries in a vector sorted by key, paying O(log n) per lookup
//! and O(n) per structural change in exchange for ordered iteration without
//! a comparator object.
//!
//! All flavors expose positional access (`get_index`, `get_full`), which is
//! what the cache layer in [`super::cached`] builds on.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::order::ElementOrder;

#[derive(Clone, Debug)]
pub(crate) enum ElementMap<K, V> {
    Hashed { map: IndexMap<K, V>, stable: bool },
    Sorted { entries: Vec<(K, V)> },
}

impl<K, V> ElementMap<K, V>
where
    K: Eq + Hash + Ord,
{
    pub(crate) fn new(order: ElementOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    pub(crate) fn with_capacity(order: ElementOrder, capacity: usize) -> Self {
        match order {
            ElementOrder::Unordered => ElementMap::Hashed {
                map: IndexMap::with_capacity(capacity),
                stable: false,
            },
            ElementOrder::Insertion => ElementMap::Hashed {
                map: IndexMap::with_capacity(capacity),
                stable: true,
            },
            ElementOrder::Sorted => ElementMap::Sorted {
                entries: Vec::with_capacity(capacity),
            },
        }
    }

    pub(crate) fn order(&self) -> ElementOrder {
        match self {
            ElementMap::Hashed { stable: false, .. } => ElementOrder::Unordered,
            ElementMap::Hashed { stable: true, .. } => ElementOrder::Insertion,
            ElementMap::Sorted { .. } => ElementOrder::Sorted,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            ElementMap::Hashed { map, .. } => map.len(),
            ElementMap::Sorted { entries } => entries.len(),
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        match self {
            ElementMap::Hashed { map, .. } => map.get(key),
            ElementMap::Sorted { entries } => entries
                .binary_search_by(|(k, _)| k.cmp(key))
                .ok()
                .map(|i| &entries[i].1),
        }
    }

    /// Lookup returning the entry's position along with the entry itself.
    pub(crate) fn get_full(&self, key: &K) -> Option<(usize, &K, &V)> {
        match self {
            ElementMap::Hashed { map, .. } => map.get_full(key),
            ElementMap::Sorted { entries } => entries
                .binary_search_by(|(k, _)| k.cmp(key))
                .ok()
                .map(|i| (i, &entries[i].0, &entries[i].1)),
        }
    }

    /// Positional access in iteration order. O(1) for every flavor.
    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        match self {
            ElementMap::Hashed { map, .. } => map.get_index(index),
            ElementMap::Sorted { entries } => entries.get(index).map(|(k, v)| (k, v)),
        }
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self {
            ElementMap::Hashed { map, .. } => map.get_mut(key),
            ElementMap::Sorted { entries } => match entries.binary_search_by(|(k, _)| k.cmp(key)) {
                Ok(i) => Some(&mut entries[i].1),
                Err(_) => None,
            },
        }
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. Sorted maps place new keys at their sorted
    /// position.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self {
            ElementMap::Hashed { map, .. } => map.insert(key, value),
            ElementMap::Sorted { entries } => {
                match entries.binary_search_by(|(k, _)| k.cmp(&key)) {
                    Ok(i) => Some(std::mem::replace(&mut entries[i].1, value)),
                    Err(i) => {
                        entries.insert(i, (key, value));
                        None
                    }
                }
            }
        }
    }

    /// Removes `key`, returning its value. Order-preserving flavors shift
    /// the remaining entries; the unordered flavor swap-removes in O(1).
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        match self {
            ElementMap::Hashed { map, stable: false } => map.swap_remove(key),
            ElementMap::Hashed { map, stable: true } => map.shift_remove(key),
            ElementMap::Sorted { entries } => entries
                .binary_search_by(|(k, _)| k.cmp(key))
                .ok()
                .map(|i| entries.remove(i).1),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            ElementMap::Hashed { map, .. } => map.clear(),
            ElementMap::Sorted { entries } => entries.clear(),
        }
    }

    /// Entry iterator in container order.
    #[inline]
    pub(crate) fn iter(&self) -> Entries<'_, K, V> {
        Entries { map: self, index: 0 }
    }

    /// Key iterator in container order.
    #[inline]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Value iterator in container order.
    #[inline]
    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

/// Entry iterator driven by positional access, so a single concrete type
/// serves every map flavor.
pub(crate) struct Entries<'a, K, V> {
    map: &'a ElementMap<K, V>,
    index: usize,
}

impl<'a, K, V> Iterator for Entries<'a, K, V>
where
    K: Eq + Hash + Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.map.get_index(self.index)?;
        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<K: Eq + Hash + Ord, V> ExactSizeIterator for Entries<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut map = ElementMap::new(ElementOrder::Insertion);
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut map = ElementMap::new(ElementOrder::Insertion);
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        map.remove(&"c");
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_sorted_order_iterates_ascending() {
        let mut map = ElementMap::new(ElementOrder::Sorted);
        map.insert(30, "c");
        map.insert(10, "a");
        map.insert(20, "b");
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_sorted_insert_replaces_existing() {
        let mut map = ElementMap::new(ElementOrder::Sorted);
        assert_eq!(map.insert(1, "old"), None);
        assert_eq!(map.insert(1, "new"), Some("old"));
        assert_eq!(map.get(&1), Some(&"new"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_unordered_contains_all_after_removal() {
        let mut map = ElementMap::new(ElementOrder::Unordered);
        for i in 0..10 {
            map.insert(i, i * i);
        }
        map.remove(&0);
        assert_eq!(map.len(), 9);
        for i in 1..10 {
            assert_eq!(map.get(&i), Some(&(i * i)));
        }
    }

    #[test]
    fn test_get_full_reports_position() {
        let mut map = ElementMap::new(ElementOrder::Sorted);
        map.insert(5, ());
        map.insert(1, ());
        map.insert(9, ());
        let (index, key, _) = map.get_full(&5).unwrap();
        assert_eq!((index, *key), (1, 5));
    }
}
