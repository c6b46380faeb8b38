//! Lifecycle primitives for raw element storage
//!
//! Every container in this crate manages uninitialized buffers by hand;
//! these primitives are the shared vocabulary for doing that correctly:
//! construct, destruct, copy/move over ranges, and *relocation*: moving
//! a range to new storage and treating the old storage as uninitialized
//! afterwards.
//!
//! Range forms take a raw cursor plus a length and return the destination
//! cursor one past the last element written. Relocation dispatches at
//! compile time on [`Relocate::TRIVIAL`]: a single bulk byte copy for
//! types that opted in, a per-element [`Relocate::relocate_one`] loop in
//! the overlap-safe direction otherwise.
//!
//! None of these primitives allocate or fail; callers resolve allocation
//! before invoking them.

mod relocate;

pub use relocate::Relocate;

use std::ptr;

/// Default-construct one element at `dst`.
///
/// # Safety
///
/// `dst` must be valid for a write of one `T`.
#[inline]
pub unsafe fn default_construct<T: Default>(dst: *mut T) {
    unsafe { ptr::write(dst, T::default()) };
}

/// Copy-construct one element at `dst` from `src`.
///
/// # Safety
///
/// `src` must point to an initialized `T`; `dst` must be valid for a
/// write of one `T` and must not alias `src`.
#[inline]
pub unsafe fn copy_construct<T: Clone>(src: *const T, dst: *mut T) {
    unsafe { ptr::write(dst, (*src).clone()) };
}

/// Move-construct one element at `dst` from `src`, vacating `src`.
///
/// # Safety
///
/// Same as [`copy_construct`]; the caller must treat `src` as
/// uninitialized afterwards.
#[inline]
pub unsafe fn move_construct<T>(src: *mut T, dst: *mut T) {
    unsafe { ptr::copy_nonoverlapping(src, dst, 1) };
}

/// Copy-assign one element from `src` over the initialized element at
/// `dst`.
///
/// # Safety
///
/// Both pointers must reference initialized, non-aliasing elements.
#[inline]
pub unsafe fn copy_assign<T: Clone>(src: *const T, dst: *mut T) {
    unsafe { (*dst).clone_from(&*src) };
}

/// Move-assign one element from `src` over the initialized element at
/// `dst`, vacating `src`.
///
/// # Safety
///
/// Same as [`copy_assign`]; the caller must treat `src` as uninitialized
/// afterwards.
#[inline]
pub unsafe fn move_assign<T>(src: *mut T, dst: *mut T) {
    unsafe {
        ptr::drop_in_place(dst);
        ptr::copy_nonoverlapping(src, dst, 1);
    }
}

/// Default-construct `len` elements at `dst`.
///
/// Returns the cursor past the last constructed element.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` elements of `T`.
pub unsafe fn default_construct_range<T: Default>(dst: *mut T, len: usize) -> *mut T {
    for i in 0..len {
        unsafe { ptr::write(dst.add(i), T::default()) };
    }
    unsafe { dst.add(len) }
}

/// Value-construct `len` elements at `dst`.
///
/// For Rust scalars `Default::default()` is the zero value, so value
/// construction and default construction coincide here.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` elements of `T`.
#[inline]
pub unsafe fn value_construct_range<T: Default>(dst: *mut T, len: usize) -> *mut T {
    unsafe { default_construct_range(dst, len) }
}

/// Construct `len` clones of `value` at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` elements of `T`.
pub unsafe fn fill_construct_range<T: Clone>(dst: *mut T, len: usize, value: &T) -> *mut T {
    for i in 0..len {
        unsafe { ptr::write(dst.add(i), value.clone()) };
    }
    unsafe { dst.add(len) }
}

/// Copy-construct `len` elements from `src` into `dst`.
///
/// # Safety
///
/// `src` must point to `len` initialized elements, `dst` must be valid
/// for writes of `len` elements, and the ranges must not overlap.
pub unsafe fn copy_construct_range<T: Clone>(src: *const T, dst: *mut T, len: usize) -> *mut T {
    for i in 0..len {
        unsafe { ptr::write(dst.add(i), (*src.add(i)).clone()) };
    }
    unsafe { dst.add(len) }
}

/// Move-construct `len` elements from `src` into `dst`.
///
/// The source range is vacated: the caller must treat it as uninitialized
/// and must not drop it.
///
/// # Safety
///
/// `src` must point to `len` initialized elements, `dst` must be valid
/// for writes of `len` elements, and the ranges must not overlap.
pub unsafe fn move_construct_range<T>(src: *mut T, dst: *mut T, len: usize) -> *mut T {
    unsafe { ptr::copy_nonoverlapping(src, dst, len) };
    unsafe { dst.add(len) }
}

/// Destruct one element in place.
///
/// # Safety
///
/// `slot` must point to an initialized `T` that is not used afterwards.
#[inline]
pub unsafe fn destruct<T>(slot: *mut T) {
    unsafe { ptr::drop_in_place(slot) };
}

/// Destruct `len` elements in place.
///
/// # Safety
///
/// `first` must point to `len` initialized elements not used afterwards.
pub unsafe fn destruct_range<T>(first: *mut T, len: usize) {
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, len)) };
}

/// Copy-assign `len` elements from `src` over the initialized elements at
/// `dst`.
///
/// # Safety
///
/// Both ranges must hold `len` initialized elements and must not overlap.
pub unsafe fn copy_assign_range<T: Clone>(src: *const T, dst: *mut T, len: usize) -> *mut T {
    for i in 0..len {
        unsafe { (*dst.add(i)).clone_from(&*src.add(i)) };
    }
    unsafe { dst.add(len) }
}

/// Move-assign `len` elements from `src` over the initialized elements at
/// `dst`, vacating the source range.
///
/// # Safety
///
/// Both ranges must hold `len` initialized elements and must not overlap.
/// The caller must treat the source range as uninitialized afterwards.
pub unsafe fn move_assign_range<T>(src: *mut T, dst: *mut T, len: usize) -> *mut T {
    for i in 0..len {
        unsafe {
            ptr::drop_in_place(dst.add(i));
            ptr::copy_nonoverlapping(src.add(i), dst.add(i), 1);
        }
    }
    unsafe { dst.add(len) }
}

/// Relocate `len` elements from `src` to `dst` by copying: each element
/// is copy-constructed into the destination and the source element is
/// destructed afterwards. The ranges must not overlap.
///
/// # Safety
///
/// `src` must point to `len` initialized elements and `dst` must be
/// valid for writes of `len` elements; the caller must treat the source
/// range as uninitialized afterwards.
pub unsafe fn copy_relocate_range<T: Clone>(src: *mut T, dst: *mut T, len: usize) -> *mut T {
    for i in 0..len {
        unsafe {
            ptr::write(dst.add(i), (*src.add(i)).clone());
            ptr::drop_in_place(src.add(i));
        }
    }
    unsafe { dst.add(len) }
}

/// Relocate `len` elements from `src` to `dst`, front to back.
///
/// The ranges may overlap provided `dst` is below `src` (a left shift);
/// the destination's first element must not lie inside the source range.
/// Afterwards the vacated source slots are uninitialized.
///
/// # Safety
///
/// `src` must point to `len` initialized elements and `dst` must be valid
/// for writes of `len` elements, subject to the overlap rule above.
pub unsafe fn relocate_range<T: Relocate>(src: *mut T, dst: *mut T, len: usize) -> *mut T {
    debug_assert!(
        !(dst > src && (dst as usize) < (src as usize) + len * std::mem::size_of::<T>()),
        "forward relocation destination begins inside the source range"
    );
    if T::TRIVIAL {
        unsafe { ptr::copy(src, dst, len) };
    } else {
        for i in 0..len {
            unsafe { T::relocate_one(src.add(i), dst.add(i)) };
        }
    }
    unsafe { dst.add(len) }
}

/// Relocate `len` elements from `src` to `dst`, back to front.
///
/// The ranges may overlap provided `dst` is above `src` (a right shift);
/// the destination's last element must not lie inside the source range.
/// Afterwards the vacated source slots are uninitialized.
///
/// # Safety
///
/// Same as [`relocate_range`], with the mirrored overlap rule.
pub unsafe fn relocate_range_backward<T: Relocate>(src: *mut T, dst: *mut T, len: usize) -> *mut T {
    debug_assert!(
        !(dst < src && (src as usize) < (dst as usize) + len * std::mem::size_of::<T>()),
        "backward relocation destination ends inside the source range"
    );
    if T::TRIVIAL {
        unsafe { ptr::copy(src, dst, len) };
    } else {
        for i in (0..len).rev() {
            unsafe { T::relocate_one(src.add(i), dst.add(i)) };
        }
    }
    unsafe { dst.add(len) }
}
