use std::cmp::Ordering;
use std::ffi::{c_int, c_void};

use crate::error::{ArgumentError, SortError, LOMUTO_OK};
use crate::raw;

/// C three-way comparator, the `qsort` shape: negative, zero or positive.
pub type CompareFn = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// `qsort`-compatible entry point for C callers.
///
/// Sorts `count` elements of `size` bytes at `base` in place with a Lomuto quicksort, using the
/// last element of each sub-range as pivot. Not stable.
///
/// Returns [`LOMUTO_OK`](crate::LOMUTO_OK), or [`LOMUTO_EINVAL`](crate::LOMUTO_EINVAL) without
/// touching the buffer if `compare` is null while `count >= 2`, if `count * size` overflows,
/// or if `base` is null while `count * size > 0`.
///
/// # Safety
///
/// `base` must be valid for reads and writes of `count * size` bytes and exclusively owned for
/// the duration of the call. `compare` must be safe to call with any two element addresses
/// inside that range and must not unwind.
#[no_mangle]
pub unsafe extern "C" fn lomuto_qsort(
    base: *mut c_void,
    count: usize,
    size: usize,
    compare: Option<CompareFn>,
) -> c_int {
    let result = match compare {
        Some(compare) => raw::sort_raw(base.cast(), count, size, |a, b| {
            compare(a.cast(), b.cast()).cmp(&0)
        }),
        None if count >= 2 => Err(ArgumentError::MissingComparator { count }.into()),
        // Nothing to compare, but the buffer arguments are still validated.
        None => raw::sort_raw(base.cast(), count, size, |_, _| Ordering::Equal),
    };

    status(result, count, size)
}

fn status(result: Result<(), SortError>, count: usize, size: usize) -> c_int {
    match result {
        Ok(()) => LOMUTO_OK,
        Err(err) => {
            tracing::warn!(count, size, %err, "lomuto_qsort rejected its arguments");
            err.status_code()
        }
    }
}
