//! Generic counting accumulator.
//!
//! Every grouping map in the collectors (actor names, material counts,
//! emitter counts, class names) follows the same lookup-or-insert-default
//! pattern. `CountMap` is that pattern, once, parameterized by key type.

use std::collections::BTreeMap;

/// A mapping from key to occurrence count.
///
/// Backed by a `BTreeMap` so enumeration order is a deterministic function of
/// the observed keys, independent of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountMap<K: Ord> {
    counts: BTreeMap<K, u64>,
}

impl<K: Ord> CountMap<K> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Increments the count for `key`, inserting it at zero first if absent.
    pub fn bump(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// The count recorded for `key`, zero if never observed.
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct keys observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// Renders the map with a caller-supplied key labeling function, in key
    /// order. Used to produce the `"<n>_Materials"`-style report breakdowns.
    pub fn to_labeled(&self, label: impl Fn(&K) -> String) -> Vec<(String, u64)> {
        self.counts.iter().map(|(k, v)| (label(k), *v)).collect()
    }
}

impl<K: Ord> FromIterator<K> for CountMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut map = Self::new();
        for key in keys {
            map.bump(key);
        }
        map
    }
}
