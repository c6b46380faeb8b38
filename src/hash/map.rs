//! Map facades over the chaining hash table engine

use super::table::{
    DefaultHashBuilder, EqualRange, InsertOutcome, PairKey, RawChainTable, RawIter, RawIterMut,
};
use crate::error::Result;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Unique-key hash map over the chaining engine
///
/// Insertion never overwrites: an insert against an existing key leaves
/// the stored entry untouched and reports that nothing was inserted. Use
/// [`insert_or_assign`](ChainHashMap::insert_or_assign) for replace
/// semantics.
///
/// # Examples
///
/// ```rust
/// use keel::ChainHashMap;
///
/// let mut map = ChainHashMap::new();
/// assert!(map.insert("mesh", 3)?);
/// assert!(!map.insert("mesh", 9)?);
/// assert_eq!(map.get(&"mesh"), Some(&3));
/// # Ok::<(), keel::KeelError>(())
/// ```
pub struct ChainHashMap<K, V, S = DefaultHashBuilder> {
    table: RawChainTable<(K, V), PairKey, S>,
}

impl<K, V> ChainHashMap<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty map with the default hash builder.
    pub fn new() -> Self {
        Self {
            table: RawChainTable::new(),
        }
    }
}

impl<K, V, S> ChainHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty map with the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            table: RawChainTable::with_hasher(hasher),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of buckets currently allocated.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Entries the map can hold before the next automatic rehash.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Maximum average chain length tolerated before a rehash.
    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Set the rehash threshold.
    pub fn set_max_load_factor(&mut self, mlf: f32) {
        self.table.set_max_load_factor(mlf);
    }

    /// Insert a new entry. Returns `true` when the entry was inserted,
    /// `false` when an equal key already existed (the stored entry is
    /// untouched and `value` is dropped).
    pub fn insert(&mut self, key: K, value: V) -> Result<bool> {
        Ok(matches!(
            self.table.insert_unique((key, value))?,
            InsertOutcome::Inserted
        ))
    }

    /// Insert or replace, returning the previous value when the key
    /// already existed.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Some(pair) = self.table.find_mut(&key) {
            return Ok(Some(mem::replace(&mut pair.1, value)));
        }
        self.table.insert_unique((key, value))?;
        Ok(None)
    }

    /// Reference to the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.find(key).map(|pair| &pair.1)
    }

    /// Mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.find_mut(key).map(|pair| &mut pair.1)
    }

    /// Whether an entry with `key` exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains(key)
    }

    /// Remove the entry under `key` and return its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove_unique(key).map(|pair| pair.1)
    }

    /// Re-bucket to at least `requested` buckets.
    pub fn rehash(&mut self, requested: usize) -> Result<()> {
        self.table.rehash(requested)
    }

    /// Make room for at least `total` entries without further rehashes.
    pub fn reserve(&mut self, total: usize) -> Result<()> {
        self.table.reserve(total)
    }

    /// Remove every entry. Keeps the bucket array.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over `(&key, &value)` pairs in bucket order.
    pub fn iter(&self) -> MapIter<'_, K, V, S> {
        MapIter {
            inner: self.table.iter(),
        }
    }

    /// Iterate with mutable access to values.
    pub fn iter_mut(&mut self) -> MapIterMut<'_, K, V, S> {
        MapIterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Iterate over keys in bucket order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over values in bucket order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Iterate over values with mutable access.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V> Default for ChainHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Clone for ChainHashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for ChainHashMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over map entries.
pub struct MapIter<'a, K, V, S> {
    inner: RawIter<'a, (K, V), PairKey, S>,
}

impl<'a, K, V, S> Iterator for MapIter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

/// Mutable iterator over map entries; keys stay shared.
pub struct MapIterMut<'a, K, V, S> {
    inner: RawIterMut<'a, (K, V), PairKey, S>,
}

impl<'a, K, V, S> Iterator for MapIterMut<'a, K, V, S> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| {
            let (k, v) = pair;
            (&*k, v)
        })
    }
}

/// Multi-key hash map over the chaining engine
///
/// Every insert stores a new entry; equal keys remain contiguous within
/// their chain so [`equal_range`](ChainHashMultiMap::equal_range) scans a
/// single run.
///
/// # Examples
///
/// ```rust
/// use keel::ChainHashMultiMap;
///
/// let mut tags = ChainHashMultiMap::new();
/// tags.insert("entity", 1)?;
/// tags.insert("entity", 2)?;
/// assert_eq!(tags.count(&"entity"), 2);
/// # Ok::<(), keel::KeelError>(())
/// ```
pub struct ChainHashMultiMap<K, V, S = DefaultHashBuilder> {
    table: RawChainTable<(K, V), PairKey, S>,
}

impl<K, V> ChainHashMultiMap<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty multimap with the default hash builder.
    pub fn new() -> Self {
        Self {
            table: RawChainTable::new(),
        }
    }
}

impl<K, V, S> ChainHashMultiMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty multimap with the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            table: RawChainTable::with_hasher(hasher),
        }
    }

    /// Number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the multimap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of buckets currently allocated.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Entries the multimap can hold before the next automatic rehash.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Maximum average chain length tolerated before a rehash.
    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Set the rehash threshold.
    pub fn set_max_load_factor(&mut self, mlf: f32) {
        self.table.set_max_load_factor(mlf);
    }

    /// Insert an entry; duplicates are always accepted.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        self.table.insert_multi((key, value))
    }

    /// Reference to the first value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.find(key).map(|pair| &pair.1)
    }

    /// Whether any entry with `key` exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains(key)
    }

    /// Number of entries stored under `key`.
    pub fn count(&self, key: &K) -> usize {
        self.table.count(key)
    }

    /// Iterate over the contiguous run of entries stored under `key`.
    pub fn equal_range<'a>(&'a self, key: &'a K) -> MultiMapRange<'a, K, V> {
        MultiMapRange {
            inner: self.table.equal_range(key),
        }
    }

    /// Remove every entry stored under `key`; returns how many were
    /// removed.
    pub fn remove_all(&mut self, key: &K) -> usize {
        self.table.remove_all(key)
    }

    /// Re-bucket to at least `requested` buckets.
    pub fn rehash(&mut self, requested: usize) -> Result<()> {
        self.table.rehash(requested)
    }

    /// Make room for at least `total` entries without further rehashes.
    pub fn reserve(&mut self, total: usize) -> Result<()> {
        self.table.reserve(total)
    }

    /// Remove every entry. Keeps the bucket array.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over `(&key, &value)` pairs in bucket order.
    pub fn iter(&self) -> MapIter<'_, K, V, S> {
        MapIter {
            inner: self.table.iter(),
        }
    }
}

impl<K: Hash + Eq, V> Default for ChainHashMultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Clone for ChainHashMultiMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for ChainHashMultiMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over one key's contiguous run in a multimap.
pub struct MultiMapRange<'a, K, V> {
    inner: EqualRange<'a, (K, V), PairKey>,
}

impl<'a, K: Eq, V: 'a> Iterator for MultiMapRange<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_insert_no_overwrite() {
        let mut map = ChainHashMap::new();
        assert!(map.insert("a", 1).unwrap());
        assert!(!map.insert("a", 2).unwrap());
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_map_insert_or_assign() {
        let mut map = ChainHashMap::new();
        assert_eq!(map.insert_or_assign("a", 1).unwrap(), None);
        assert_eq!(map.insert_or_assign("a", 2).unwrap(), Some(1));
        assert_eq!(map.get(&"a"), Some(&2));
    }

    #[test]
    fn test_map_get_mut_remove() {
        let mut map = ChainHashMap::new();
        map.insert("counter", 0).unwrap();
        *map.get_mut(&"counter").unwrap() += 10;
        assert_eq!(map.remove(&"counter"), Some(10));
        assert_eq!(map.remove(&"counter"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_iterators() {
        let mut map = ChainHashMap::new();
        for i in 0..20 {
            map.insert(i, i * 10).unwrap();
        }
        assert_eq!(map.iter().count(), 20);
        assert_eq!(map.keys().count(), 20);
        let total: i32 = map.values().sum();
        assert_eq!(total, (0..20).map(|i| i * 10).sum());

        for v in map.values_mut() {
            *v += 1;
        }
        assert_eq!(map.get(&3), Some(&31));
    }

    #[test]
    fn test_map_clone_debug() {
        let mut map = ChainHashMap::new();
        map.insert("k", 1).unwrap();
        let cloned = map.clone();
        assert_eq!(cloned.get(&"k"), Some(&1));
        assert!(format!("{:?}", map).contains('k'));
    }

    #[test]
    fn test_multimap_equal_range_contiguity() {
        // Inserting A B A C A yields the three A entries in one
        // contiguous scan.
        let mut map = ChainHashMultiMap::new();
        map.insert('A', 1).unwrap();
        map.insert('B', 2).unwrap();
        map.insert('A', 3).unwrap();
        map.insert('C', 4).unwrap();
        map.insert('A', 5).unwrap();

        let values: Vec<i32> = map.equal_range(&'A').map(|(_, v)| *v).collect();
        assert_eq!(values.len(), 3);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 3, 5]);
        assert_eq!(map.count(&'A'), 3);
        assert_eq!(map.count(&'B'), 1);
    }

    #[test]
    fn test_multimap_remove_all() {
        let mut map = ChainHashMultiMap::new();
        for (k, v) in [("x", 1), ("y", 2), ("x", 3)] {
            map.insert(k, v).unwrap();
        }
        assert_eq!(map.remove_all(&"x"), 2);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&"y"));
    }
}
