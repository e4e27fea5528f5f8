//! `CachedMap` — a read cache over [`ElementMap`] for the iterate-then-get
//! and hot-key access patterns of graph queries.
//!
//! The cache keeps packed `(generation, entry index)` stamps in atomic
//! cells:
//!
//! - the **last-yielded** cell is updated by the key iterator as it walks
//!   the map, so a `get` immediately following iteration of the same key
//!   skips the lookup entirely;
//! - two **hot** cells form a move-to-front cache of the most recently
//!   retrieved keys, enabled only for sorted backings where a lookup costs
//!   O(log n) and is therefore worth short-circuiting.
//!
//! Every mutation bumps the generation, invalidating all stamps at once. A
//! stamp is never trusted on its own: a hit is confirmed by comparing the
//! stamped entry's key against the queried key, so even a stale or torn
//! stamp can only cause a cache miss, never a wrong answer. This is also
//! what makes concurrent read-only sharing safe: the cells are relaxed
//! atomics and all mutation requires `&mut self`.

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

use super::element_map::{ElementMap, Entries};
use crate::order::ElementOrder;

/// Sentinel for "no stamp". Doubles as an unreachable packed value: a real
/// stamp with this bit pattern would need both a wrapped-around generation
/// and a four-billion-entry map, and would still be rejected by the key
/// equality check.
const EMPTY: u64 = u64::MAX;

#[inline]
fn pack(generation: u64, index: usize) -> u64 {
    ((generation & 0xFFFF_FFFF) << 32) | (index as u64 & 0xFFFF_FFFF)
}

#[inline]
fn unpack(stamp: u64) -> (u32, usize) {
    ((stamp >> 32) as u32, (stamp & 0xFFFF_FFFF) as usize)
}

pub(crate) struct CachedMap<K, V> {
    entries: ElementMap<K, V>,
    generation: u64,
    last: CachePadded<AtomicU64>,
    hot: Option<Box<[CachePadded<AtomicU64>; 2]>>,
}

impl<K, V> CachedMap<K, V>
where
    K: Eq + Hash + Ord,
{
    pub(crate) fn new(order: ElementOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    pub(crate) fn with_capacity(order: ElementOrder, capacity: usize) -> Self {
        let hot = order.is_sorted().then(|| {
            Box::new([
                CachePadded::new(AtomicU64::new(EMPTY)),
                CachePadded::new(AtomicU64::new(EMPTY)),
            ])
        });
        CachedMap {
            entries: ElementMap::with_capacity(order, capacity),
            generation: 0,
            last: CachePadded::new(AtomicU64::new(EMPTY)),
            hot,
        }
    }

    pub(crate) fn order(&self) -> ElementOrder {
        self.entries.order()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Cache-assisted lookup.
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        if let Some(value) = self.probe(&self.last, key) {
            return Some(value);
        }
        if let Some(hot) = &self.hot {
            if let Some(value) = self.probe(&hot[0], key) {
                return Some(value);
            }
            if let Some(value) = self.probe(&hot[1], key) {
                // Move-to-front: promote the second slot.
                let promoted = hot[1].load(Ordering::Relaxed);
                hot[1].store(hot[0].load(Ordering::Relaxed), Ordering::Relaxed);
                hot[0].store(promoted, Ordering::Relaxed);
                return Some(value);
            }
        }
        let (index, _, value) = self.entries.get_full(key)?;
        self.note_retrieval(index);
        Some(value)
    }

    /// Value mutation does not move entries, so the positional stamps stay
    /// valid and no invalidation is needed.
    #[inline]
    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.invalidate();
        self.entries.insert(key, value)
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.invalidate();
        self.entries.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.invalidate();
        self.entries.clear();
    }

    /// Key iterator that stamps each yielded entry into the last-yielded
    /// cell, priming the cache for an immediately following `get`.
    #[inline]
    pub(crate) fn keys(&self) -> CachedKeys<'_, K, V> {
        CachedKeys { map: self, index: 0 }
    }

    /// Plain entry iterator, bypassing the cache cells.
    #[inline]
    pub(crate) fn iter(&self) -> Entries<'_, K, V> {
        self.entries.iter()
    }

    fn probe(&self, cell: &AtomicU64, key: &K) -> Option<&V> {
        let stamp = cell.load(Ordering::Relaxed);
        if stamp == EMPTY {
            return None;
        }
        let (stamp_generation, index) = unpack(stamp);
        if stamp_generation != self.generation as u32 {
            return None;
        }
        let (entry_key, value) = self.entries.get_index(index)?;
        (entry_key == key).then_some(value)
    }

    fn note_retrieval(&self, index: usize) {
        if index > u32::MAX as usize {
            return;
        }
        let stamp = pack(self.generation, index);
        if let Some(hot) = &self.hot {
            hot[1].store(hot[0].load(Ordering::Relaxed), Ordering::Relaxed);
            hot[0].store(stamp, Ordering::Relaxed);
        }
    }

    #[inline]
    fn note_yield(&self, index: usize) {
        if index <= u32::MAX as usize {
            self.last.store(pack(self.generation, index), Ordering::Relaxed);
        }
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.last.store(EMPTY, Ordering::Relaxed);
        if let Some(hot) = &self.hot {
            hot[0].store(EMPTY, Ordering::Relaxed);
            hot[1].store(EMPTY, Ordering::Relaxed);
        }
    }
}

impl<K, V> Clone for CachedMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let hot = self.hot.as_ref().map(|_| {
            Box::new([
                CachePadded::new(AtomicU64::new(EMPTY)),
                CachePadded::new(AtomicU64::new(EMPTY)),
            ])
        });
        CachedMap {
            entries: self.entries.clone(),
            generation: self.generation,
            last: CachePadded::new(AtomicU64::new(EMPTY)),
            hot,
        }
    }
}

impl<K, V> fmt::Debug for CachedMap<K, V>
where
    K: fmt::Debug + Eq + Hash + Ord,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Key iterator over a [`CachedMap`]; see [`CachedMap::keys`].
pub(crate) struct CachedKeys<'a, K, V> {
    map: &'a CachedMap<K, V>,
    index: usize,
}

impl<'a, K, V> Iterator for CachedKeys<'a, K, V>
where
    K: Eq + Hash + Ord,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, _) = self.map.entries.get_index(self.index)?;
        self.map.note_yield(self.index);
        self.index += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<K: Eq + Hash + Ord, V> ExactSizeIterator for CachedKeys<'_, K, V> {}
