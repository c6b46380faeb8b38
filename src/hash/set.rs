//! Set facades over the chaining hash table engine

use super::table::{
    DefaultHashBuilder, EqualRange, IdentityKey, InsertOutcome, RawChainTable, RawIter,
};
use crate::error::Result;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Unique-key hash set over the chaining engine
///
/// # Examples
///
/// ```rust
/// use keel::ChainHashSet;
///
/// let mut set = ChainHashSet::new();
/// assert!(set.insert("alpha")?);
/// assert!(!set.insert("alpha")?);
/// assert!(set.contains(&"alpha"));
/// # Ok::<(), keel::KeelError>(())
/// ```
pub struct ChainHashSet<T, S = DefaultHashBuilder> {
    table: RawChainTable<T, IdentityKey, S>,
}

impl<T> ChainHashSet<T>
where
    T: Hash + Eq,
{
    /// Create an empty set with the default hash builder.
    pub fn new() -> Self {
        Self {
            table: RawChainTable::new(),
        }
    }
}

impl<T, S> ChainHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty set with the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            table: RawChainTable::with_hasher(hasher),
        }
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the set holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of buckets currently allocated.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Values the set can hold before the next automatic rehash.
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

    /// Insert a value. Returns `true` when the value was inserted,
    /// `false` when an equal value already existed.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        Ok(matches!(
            self.table.insert_unique(value)?,
            InsertOutcome::Inserted
        ))
    }

    /// Whether an equal value is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.table.contains(value)
    }

    /// Reference to the stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.table.find(value)
    }

    /// Remove the stored value equal to `value`; returns whether one
    /// existed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.table.remove_unique(value).is_some()
    }

    /// Remove and return the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.table.remove_unique(value)
    }

    /// Re-bucket to at least `requested` buckets.
    pub fn rehash(&mut self, requested: usize) -> Result<()> {
        self.table.rehash(requested)
    }

    /// Make room for at least `total` values without further rehashes.
    pub fn reserve(&mut self, total: usize) -> Result<()> {
        self.table.reserve(total)
    }

    /// Remove every value. Keeps the bucket array.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over stored values in bucket order.
    pub fn iter(&self) -> SetIter<'_, T, S> {
        SetIter {
            inner: self.table.iter(),
        }
    }
}

impl<T: Hash + Eq> Default for ChainHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for ChainHashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T, S> fmt::Debug for ChainHashSet<T, S>
where
    T: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over set values.
pub struct SetIter<'a, T, S> {
    inner: RawIter<'a, T, IdentityKey, S>,
}

impl<'a, T, S> Iterator for SetIter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Multi-key hash set over the chaining engine
///
/// Every insert stores a new value; equal values remain contiguous in
/// their chain.
///
/// # Examples
///
/// ```rust
/// use keel::ChainHashMultiSet;
///
/// let mut bag = ChainHashMultiSet::new();
/// bag.insert("hit")?;
/// bag.insert("hit")?;
/// assert_eq!(bag.count(&"hit"), 2);
/// # Ok::<(), keel::KeelError>(())
/// ```
pub struct ChainHashMultiSet<T, S = DefaultHashBuilder> {
    table: RawChainTable<T, IdentityKey, S>,
}

impl<T> ChainHashMultiSet<T>
where
    T: Hash + Eq,
{
    /// Create an empty multiset with the default hash builder.
    pub fn new() -> Self {
        Self {
            table: RawChainTable::new(),
        }
    }
}

impl<T, S> ChainHashMultiSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty multiset with the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            table: RawChainTable::with_hasher(hasher),
        }
    }

    /// Number of stored values, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the multiset holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of buckets currently allocated.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Insert a value; duplicates are always accepted.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.table.insert_multi(value)
    }

    /// Whether an equal value is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.table.contains(value)
    }

    /// Number of stored values equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.table.count(value)
    }

    /// Iterate over the contiguous run of values equal to `value`.
    pub fn equal_range<'a>(&'a self, value: &'a T) -> EqualRange<'a, T, IdentityKey> {
        self.table.equal_range(value)
    }

    /// Remove every value equal to `value`; returns how many were
    /// removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.table.remove_all(value)
    }

    /// Re-bucket to at least `requested` buckets.
    pub fn rehash(&mut self, requested: usize) -> Result<()> {
        self.table.rehash(requested)
    }

    /// Remove every value. Keeps the bucket array.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over stored values in bucket order.
    pub fn iter(&self) -> SetIter<'_, T, S> {
        SetIter {
            inner: self.table.iter(),
        }
    }
}

impl<T: Hash + Eq> Default for ChainHashMultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for ChainHashMultiSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T, S> fmt::Debug for ChainHashMultiSet<T, S>
where
    T: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
