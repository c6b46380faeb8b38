//! # Keel: Container and Memory-Relocation Substrate
//!
//! This crate is the container foundation of an engine codebase: a small
//! set of lifecycle primitives (construct/destruct/copy/move/relocate
//! over ranges) and four container families built on top of them.
//!
//! ## Key Features
//!
//! - **Lifecycle Primitives**: Shared construct/destruct/relocate range
//!   operations every container is built from
//! - **Trivial Relocation**: A compile-time, opt-in trait that lets
//!   containers move ranges with bulk byte copies instead of per-element
//!   moves
//! - **`DynVec<T>`**: Relocating dynamic array with exact reserve and
//!   doubling growth
//! - **`ByteString`**: Growable byte string with a committed null
//!   terminator, usable as a C string at any time
//! - **Chaining Hash Tables**: One separate-chaining engine behind map,
//!   multimap, set, and multiset facades
//! - **`RingDeque<T>`**: Double-ended circular buffer with signed,
//!   unbounded logical indices and O(1) pushes at both ends
//! - **Explicit Allocation Failure**: Every growth path reports allocator
//!   exhaustion as a `Result`, never as silent corruption
//!
//! ## Quick Start
//!
//! ```rust
//! use keel::{ByteString, ChainHashMap, DynVec, RingDeque};
//!
//! // Dynamic array with relocating growth
//! let mut vec = DynVec::new();
//! vec.push(42)?;
//!
//! // Byte string, always consumable as a C string
//! let mut name = ByteString::new();
//! name.push_str("player-one")?;
//! assert_eq!(name.c_str().to_bytes(), b"player-one");
//!
//! // Unique-key hash map; insert never overwrites
//! let mut scores = ChainHashMap::new();
//! scores.insert("alice", 9000)?;
//!
//! // Double-ended queue with O(1) pushes at both ends
//! let mut queue = RingDeque::new();
//! queue.push_back(1)?;
//! queue.push_front(0)?;
//! # Ok::<(), keel::KeelError>(())
//! ```
//!
//! ## Threading
//!
//! All containers are single-owner, unsynchronized value types. `Send`
//! and `Sync` follow the element type; sharing across threads requires
//! external synchronization.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;
pub mod hash;
pub mod lifecycle;
pub mod memory;
pub mod string;

pub use containers::{DynVec, RingDeque};
pub use error::{KeelError, Result};
pub use hash::{
    ChainHashMap, ChainHashMultiMap, ChainHashMultiSet, ChainHashSet, DefaultHashBuilder,
};
pub use lifecycle::Relocate;
pub use memory::{AllocCounters, AllocSnapshot};
pub use string::ByteString;
