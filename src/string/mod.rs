//! String storage built on the container substrate
//!
//! - **`ByteString`** - growable byte string with a committed null
//!   terminator, usable as a C string at any time

mod byte_string;

pub use byte_string::ByteString;
