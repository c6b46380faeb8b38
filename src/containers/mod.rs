//! Container types built on the lifecycle primitives
//!
//! - **`DynVec<T>`** - relocating dynamic array with exact reserve and
//!   doubling growth
//! - **`RingDeque<T>`** - growable double-ended circular buffer with
//!   signed unbounded logical indices
//!
//! Both containers move elements exclusively through the relocation
//! primitives, so a `TRIVIAL` element type is shuffled with bulk byte
//! copies everywhere.

mod dyn_vec;
mod ring_deque;

pub use dyn_vec::DynVec;
pub use ring_deque::{RingDeque, RingIter};
