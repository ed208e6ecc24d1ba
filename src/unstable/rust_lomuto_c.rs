//! Drives `lomuto_qsort` through the C calling convention, like a C caller would.

use std::cmp::Ordering;

use crate::ffi_util::c_sort_by;

sort_impl!("rust_lomuto_c_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    c_sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    c_sort_by(v, compare);
}
