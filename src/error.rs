//! Error handling for the keel substrate
//!
//! The failure taxonomy here is deliberately narrow: the only recoverable
//! failure a container can surface is allocation failure. Everything else
//! (out-of-range indices, invalid ranges) is a caller contract violation
//! and is reported through checked panics at the call site.

use thiserror::Error;

/// Main error type for the keel substrate
#[derive(Error, Debug)]
pub enum KeelError {
    /// Memory allocation failure
    #[error("memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested from the allocator
        size: usize,
    },

    /// A requested capacity exceeds what the element layout can represent
    #[error("capacity overflow: {elements} elements of {element_size} bytes")]
    CapacityOverflow {
        /// Requested element count
        elements: usize,
        /// Size of one element in bytes
        element_size: usize,
    },
}

impl KeelError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a capacity overflow error
    pub fn capacity_overflow(elements: usize, element_size: usize) -> Self {
        Self::CapacityOverflow {
            elements,
            element_size,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::CapacityOverflow { .. } => "capacity",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeelError>;

/// Panic unless `index < len`.
///
/// Containers use this at every positional access; release builds keep the
/// check because an out-of-range access is a contract violation, not an
/// error value.
#[inline]
#[track_caller]
pub fn assert_index(index: usize, len: usize) {
    assert!(
        index < len,
        "index out of bounds: the len is {} but the index is {}",
        len,
        index
    );
}

/// Panic unless `start <= end <= len`.
#[inline]
#[track_caller]
pub fn assert_range(start: usize, end: usize, len: usize) {
    assert!(
        start <= end,
        "invalid range: start {} > end {}",
        start,
        end
    );
    assert!(
        end <= len,
        "range out of bounds: the len is {} but the range ends at {}",
        len,
        end
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = KeelError::out_of_memory(4096);
        assert_eq!(err.category(), "memory");
        let display = format!("{}", err);
        assert!(display.contains("4096"));

        let err = KeelError::capacity_overflow(usize::MAX, 8);
        assert_eq!(err.category(), "capacity");
    }

    #[test]
    fn test_assert_index_ok() {
        assert_index(0, 1);
        assert_index(9, 10);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_assert_index_panics() {
        assert_index(10, 10);
    }

    #[test]
    fn test_assert_range_ok() {
        assert_range(0, 0, 0);
        assert_range(2, 8, 10);
        assert_range(5, 5, 5);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_assert_range_inverted() {
        assert_range(8, 2, 10);
    }

    #[test]
    #[should_panic(expected = "range out of bounds")]
    fn test_assert_range_past_end() {
        assert_range(2, 15, 10);
    }
}
