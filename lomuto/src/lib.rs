//! In-place Lomuto quicksort, by comparator, over typed slices and untyped fixed-stride buffers.
//!
//! Every surface runs the same algorithm: the last element of each sub-range is the pivot, a
//! single left-to-right scan moves everything that compares strictly less than the pivot in
//! front of it, and both sides are sorted independently. The pivot rule is deterministic, so
//! the final arrangement, including the relative order of equal elements, is a pure function
//! of the input and the comparator.
//!
//! - [`sort`], [`sort_by`], [`sort_by_key`], [`try_sort_by`] for `&mut [T]`.
//! - [`sort_bytes`], [`try_sort_bytes`] for a `&mut [u8]` of `count` elements of `size` bytes.
//! - [`sort_raw`], [`try_sort_raw`] for type-erased callers holding a raw pointer.
//! - [`lomuto_qsort`] for C callers expecting a `qsort`-shaped function.

use core::cmp::Ordering;
use core::mem;

mod cancel;
mod error;
mod ffi;
mod quicksort;
mod raw;

pub use cancel::{Cancel, Never};
pub use error::{ArgumentError, SortError, LOMUTO_ECANCELED, LOMUTO_EINVAL, LOMUTO_OK};
pub use ffi::{lomuto_qsort, CompareFn};
pub use raw::{sort_bytes, sort_raw, try_sort_bytes, try_sort_raw, ElementLayout};

use quicksort::Typed;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), *O*(*n* \* log(*n*)) on typical input and *O*(*n*^2) on input that is already
/// sorted, reverse sorted or all equal. Stack use is *O*(log(*n*)) in all cases.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 1, 4, 2];
///
/// lomuto::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, T::cmp);
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator must define a total order for the elements in the slice. If it doesn't, the
/// resulting order is unspecified, but the slice still holds every original element exactly
/// once and the call terminates. A panicking comparator leaves the slice in the same state.
///
/// Elements that compare [`Ordering::Equal`] to the pivot stay on its right. For example two
/// elements that compare equal come out swapped:
///
/// ```
/// let mut v = [(1, 'a'), (1, 'b')];
///
/// lomuto::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
/// assert_eq!(v, [(1, 'b'), (1, 'a')]);
/// ```
///
/// Callers that need a stable order must add a tie-breaking key to the comparison.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Cancellation is the only error `try_sort_by` reports and `Never` cannot fire.
    let res = try_sort_by(v, compare, &Never);
    debug_assert_eq!(res, Ok(()));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// lomuto::sort_by_key(&mut v, |k| k.abs());
/// assert_eq!(v, [1, 2, -3, 4, -5]);
/// ```
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort_by(v, |a, b| f(a).cmp(&f(b)));
}

/// [`sort_by`] with a cancellation signal, polled before each partition step.
///
/// # Errors
///
/// [`SortError::Cancelled`] if `cancel` fired before the sort finished. The slice then holds
/// some permutation of its original elements.
pub fn try_sort_by<T, F, C>(v: &mut [T], compare: F, cancel: &C) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    C: Cancel + ?Sized,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 || v.len() < 2 {
        return Ok(());
    }

    let mut elements = Typed::new(v, compare);
    let len = elements.len();

    quicksort::quicksort(&mut elements, 0, len, cancel)
}
