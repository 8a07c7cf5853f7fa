//! HashTable: separate-chaining hash map with capacity doubling.
//!
//! Buckets are kept sparsely: only indices whose chain is non-empty have an
//! entry in the bucket index, and a bucket is dropped as soon as its last
//! entry is removed. Every entry lives in the chain at
//! `bucket_index(key, capacity)`; growing the capacity moves all of them.

use crate::chain::Chain;
use crate::hash_units::{bucket_index, HashUnits};
use core::borrow::Borrow;
use core::fmt;
use core::mem;
use tracing::debug;

/// Bucket count of a table created with [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Occupancy at which the table doubles its capacity.
pub const LOAD_FACTOR: f64 = 0.75;

pub struct HashTable<K, V> {
    buckets: hashbrown::HashMap<usize, Chain<(K, V)>>,
    capacity: usize,
    len: usize,
}

impl<K, V> HashTable<K, V>
where
    K: HashUnits + Eq,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty table with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: hashbrown::HashMap::new(),
            capacity: capacity.max(1),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn length(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn index_of<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + HashUnits,
    {
        bucket_index(key, self.capacity)
    }

    /// Insert or overwrite. Returns the previous value for `key`, if any.
    ///
    /// A new key that would bring occupancy to the load factor first doubles
    /// the capacity and rehashes every entry.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        if (self.len + 1) as f64 >= self.capacity as f64 * LOAD_FACTOR {
            self.rehash(self.capacity.saturating_mul(2));
        }
        let idx = self.index_of(&key);
        self.buckets.entry(idx).or_default().append((key, value));
        self.len += 1;
        None
    }

    // Move every entry into fresh buckets sized for `capacity`.
    fn rehash(&mut self, capacity: usize) {
        debug!(
            from = self.capacity,
            to = capacity,
            len = self.len,
            "growing hash table"
        );
        let old = mem::take(&mut self.buckets);
        self.capacity = capacity;
        for (key, value) in old.into_values().flatten() {
            let idx = self.index_of(&key);
            self.buckets.entry(idx).or_default().append((key, value));
        }
    }

    fn find_entry<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        self.buckets
            .get(&self.index_of(key))?
            .iter()
            .find(|(k, _)| k.borrow() == key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        self.find_entry(key).map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        let idx = self.index_of(key);
        self.buckets
            .get_mut(&idx)?
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        self.find_entry(key).is_some()
    }

    /// Remove `key` and return its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        let idx = self.index_of(key);
        let chain = self.buckets.get_mut(&idx)?;
        let (_, value) = chain.delete_first_where(|(k, _)| k.borrow() == key)?;
        if chain.is_empty() {
            self.buckets.remove(&idx);
        }
        self.len -= 1;
        Some(value)
    }

    /// Remove `key`. Returns whether an entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + HashUnits + Eq,
    {
        self.take(key).is_some()
    }

    /// Drop every entry. `capacity`, when given, becomes the new bucket
    /// count (at least one); otherwise the current capacity is kept.
    pub fn clear(&mut self, capacity: Option<usize>) {
        self.buckets.clear();
        self.len = 0;
        if let Some(capacity) = capacity {
            let capacity = capacity.max(1);
            if capacity != self.capacity {
                debug!(from = self.capacity, to = capacity, "resetting hash table capacity");
            }
            self.capacity = capacity;
        }
    }
}

impl<K, V> HashTable<K, V> {
    /// Iterate over all entries, grouped by bucket with buckets in arbitrary
    /// order; within a bucket, entries follow chain order. The order changes
    /// when the table grows.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .values()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }

    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: HashUnits + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: HashUnits + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: HashUnits + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<K, V> HashTable<K, V>
where
    K: HashUnits + Eq,
{
    /// Panics if any structural invariant is violated.
    pub(crate) fn assert_invariants(&self) {
        let mut total = 0;
        for (&idx, chain) in &self.buckets {
            assert!(idx < self.capacity, "bucket {idx} outside capacity {}", self.capacity);
            assert!(!chain.is_empty(), "empty chain kept at bucket {idx}");
            assert_eq!(chain.len(), chain.iter().count());
            for (k, _) in chain {
                assert_eq!(self.index_of(k), idx, "entry stored in the wrong bucket");
            }
            total += chain.len();
        }
        assert_eq!(total, self.len, "length disagrees with stored entries");
        let keys = self.keys();
        for (i, a) in keys.iter().enumerate() {
            assert!(keys[i + 1..].iter().all(|b| a != b), "duplicate key stored");
        }
    }
}
