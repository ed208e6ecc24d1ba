//! Drives the type-erased entry point with typed slices.

use std::cmp::Ordering;
use std::mem;

sort_impl!("rust_lomuto_raw_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // SAFETY: the slice is exclusively borrowed for the call. Every element address is
    // `base + i * size_of::<T>()`, so it keeps the alignment of `T`.
    let res = unsafe {
        lomuto::sort_raw(
            v.as_mut_ptr().cast(),
            v.len(),
            mem::size_of::<T>(),
            |a, b| compare(&*a.cast::<T>(), &*b.cast::<T>()),
        )
    };

    if let Err(err) = res {
        panic!("a slice always forms a valid layout: {err}");
    }
}
