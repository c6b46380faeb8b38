//! Hash containers built on one separate-chaining engine
//!
//! A single engine, [`RawChainTable`], backs every variant here,
//! parameterized by a key-extraction strategy:
//!
//! - **`ChainHashMap<K, V>`** - unique keys, insert never overwrites
//! - **`ChainHashMultiMap<K, V>`** - duplicate keys, contiguous runs
//! - **`ChainHashSet<T>`** - unique values
//! - **`ChainHashMultiSet<T>`** - duplicate values, contiguous runs
//!
//! All variants hash with `ahash` by default and rehash by re-linking
//! their existing nodes, never reallocating them.

mod map;
mod set;
mod table;

pub use map::{ChainHashMap, ChainHashMultiMap, MapIter, MapIterMut, MultiMapRange};
pub use set::{ChainHashMultiSet, ChainHashSet, SetIter};
pub use table::{
    DefaultHashBuilder, EqualRange, ExtractKey, IdentityKey, InsertOutcome, PairKey,
    RawChainTable, RawIter, RawIterMut,
};
