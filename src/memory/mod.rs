//! Allocator boundary for the container substrate
//!
//! The raw allocator is an external collaborator; this module is the whole
//! interface the containers see. It provides sized, typed array allocation
//! over `std::alloc` with null results converted into [`KeelError`], plus
//! [`AllocCounters`], the allocation telemetry the boundary maintains on
//! every call.
//!
//! Container growth paths call [`alloc_array`]/[`dealloc_array`] directly
//! and never realloc in place: growth always allocates fresh storage,
//! relocates, and frees the old buffer, which is what keeps the relocation
//! trait meaningful.

use crate::error::{KeelError, Result};
use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};

/// Allocation telemetry maintained by the allocator boundary.
///
/// Counters are updated inside [`alloc_array`]/[`dealloc_array`] only; the
/// containers themselves never touch them. Read a coherent view with
/// [`AllocCounters::snapshot`].
#[derive(Debug, Default)]
pub struct AllocCounters {
    allocated_bytes: AtomicU64,
    freed_bytes: AtomicU64,
    alloc_calls: AtomicU64,
    free_calls: AtomicU64,
}

/// Point-in-time view of [`AllocCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocSnapshot {
    /// Total bytes handed out since process start
    pub allocated_bytes: u64,
    /// Total bytes returned since process start
    pub freed_bytes: u64,
    /// Number of successful allocation calls
    pub alloc_calls: u64,
    /// Number of deallocation calls
    pub free_calls: u64,
}

impl AllocSnapshot {
    /// Bytes currently outstanding (allocated and not yet freed).
    pub fn live_bytes(&self) -> u64 {
        self.allocated_bytes.saturating_sub(self.freed_bytes)
    }
}

impl AllocCounters {
    /// Create a zeroed counter set.
    pub const fn new() -> Self {
        Self {
            allocated_bytes: AtomicU64::new(0),
            freed_bytes: AtomicU64::new(0),
            alloc_calls: AtomicU64::new(0),
            free_calls: AtomicU64::new(0),
        }
    }

    fn record_alloc(&self, bytes: usize) {
        self.allocated_bytes
            .fetch_add(bytes as u64, Ordering::Relaxed);
        self.alloc_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn record_free(&self, bytes: usize) {
        self.freed_bytes.fetch_add(bytes as u64, Ordering::Relaxed);
        self.free_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of the counters.
    pub fn snapshot(&self) -> AllocSnapshot {
        AllocSnapshot {
            allocated_bytes: self.allocated_bytes.load(Ordering::Relaxed),
            freed_bytes: self.freed_bytes.load(Ordering::Relaxed),
            alloc_calls: self.alloc_calls.load(Ordering::Relaxed),
            free_calls: self.free_calls.load(Ordering::Relaxed),
        }
    }
}

static COUNTERS: AllocCounters = AllocCounters::new();

/// Telemetry for every allocation that crossed this boundary.
pub fn counters() -> &'static AllocCounters {
    &COUNTERS
}

/// Compute the array layout for `len` elements of `T`, rejecting overflow.
#[inline]
fn array_layout<T>(len: usize) -> Result<Layout> {
    Layout::array::<T>(len)
        .map_err(|_| KeelError::capacity_overflow(len, mem::size_of::<T>()))
}

/// Allocate uninitialized storage for `len` elements of `T`.
///
/// `len` must be non-zero; empty containers hold a null pointer instead of
/// an empty allocation. Alignment comes from `T`'s layout (the machine
/// default for the type).
///
/// # Errors
///
/// [`KeelError::CapacityOverflow`] if the layout cannot be represented,
/// [`KeelError::OutOfMemory`] if the allocator returns null.
pub fn alloc_array<T>(len: usize) -> Result<NonNull<T>> {
    debug_assert!(len > 0, "alloc_array of zero elements");
    let layout = array_layout::<T>(len)?;
    debug_assert!(layout.size() > 0, "alloc_array of a zero-sized type");

    // SAFETY: layout has non-zero size for len > 0 and sized T; zero-sized
    // element types never reach the allocator (cap stays 0).
    let ptr = unsafe { alloc::alloc(layout) as *mut T };
    match NonNull::new(ptr) {
        Some(ptr) => {
            COUNTERS.record_alloc(layout.size());
            Ok(ptr)
        }
        None => Err(KeelError::out_of_memory(layout.size())),
    }
}

/// Return storage previously obtained from [`alloc_array`] with the same
/// `len`.
///
/// # Safety
///
/// `ptr` must come from `alloc_array::<T>(len)` with exactly this `len`,
/// and must not be used afterwards. Elements must already be destructed.
pub unsafe fn dealloc_array<T>(ptr: NonNull<T>, len: usize) {
    debug_assert!(len > 0, "dealloc_array of zero elements");
    let layout = Layout::array::<T>(len).expect("layout validated at allocation");
    // SAFETY: caller contract, same layout as the original allocation.
    unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
    COUNTERS.record_free(layout.size());
}

/// Usable size in bytes of an array allocation of `len` elements.
///
/// The boundary allocates exactly the requested layout, so this is the
/// layout size itself.
pub fn alloc_size_of<T>(len: usize) -> usize {
    Layout::array::<T>(len).map(|l| l.size()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_roundtrip() {
        // Counters are process-global, so only monotonic deltas are
        // meaningful while other tests run in parallel.
        let before = counters().snapshot();
        let ptr = alloc_array::<u64>(16).unwrap();
        let mid = counters().snapshot();
        assert!(mid.allocated_bytes >= before.allocated_bytes + 128);
        assert!(mid.alloc_calls >= before.alloc_calls + 1);

        unsafe { dealloc_array(ptr, 16) };
        let after = counters().snapshot();
        assert!(after.freed_bytes >= mid.freed_bytes + 128);
        assert!(after.free_calls >= mid.free_calls + 1);
    }

    #[test]
    fn test_capacity_overflow() {
        let err = alloc_array::<u64>(usize::MAX / 4).unwrap_err();
        assert_eq!(err.category(), "capacity");
    }

    #[test]
    fn test_alloc_size_of() {
        assert_eq!(alloc_size_of::<u32>(8), 32);
        assert_eq!(alloc_size_of::<u8>(7), 7);
    }

    #[test]
    fn test_snapshot_live_bytes() {
        let snap = AllocSnapshot {
            allocated_bytes: 100,
            freed_bytes: 60,
            alloc_calls: 3,
            free_calls: 2,
        };
        assert_eq!(snap.live_bytes(), 40);
    }
}
