use core::cmp::Ordering;

use crate::cancel::Cancel;
use crate::error::SortError;

/// Element storage the quicksort driver works on. All positions are element indices into the
/// storage, never byte offsets.
pub(crate) trait Elements {
    /// Returns `true` if the element at `a` compares strictly less than the element at `b`.
    fn is_less(&mut self, a: usize, b: usize) -> bool;

    /// Exchanges the elements at `a` and `b`. Callers guarantee `a != b`.
    fn swap(&mut self, a: usize, b: usize);
}

/// Storage for a typed slice and its three-way comparator.
pub(crate) struct Typed<'a, T, F> {
    v: &'a mut [T],
    compare: F,
}

impl<'a, T, F> Typed<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub(crate) fn new(v: &'a mut [T], compare: F) -> Self {
        Self { v, compare }
    }

    pub(crate) fn len(&self) -> usize {
        self.v.len()
    }
}

impl<T, F> Elements for Typed<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        (self.compare)(&self.v[a], &self.v[b]) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

/// Sorts the elements `lo..hi` of `e`.
///
/// The pivot of every sub-range is its last element. The shorter side of each partition is
/// sorted recursively and the longer side by continuing the loop, which bounds the stack depth
/// to *O*(log(*n*)) even for inputs that drive the pivot rule into *O*(*n*^2) comparisons. The
/// two sides are disjoint, so the order they are visited in does not change the result.
pub(crate) fn quicksort<E, C>(
    e: &mut E,
    mut lo: usize,
    mut hi: usize,
    cancel: &C,
) -> Result<(), SortError>
where
    E: Elements + ?Sized,
    C: Cancel + ?Sized,
{
    while hi - lo >= 2 {
        if cancel.is_cancelled() {
            tracing::debug!(lo, hi, "sort cancelled between partition steps");
            return Err(SortError::Cancelled);
        }

        let mid = partition(e, lo, hi);

        if mid - lo < hi - (mid + 1) {
            quicksort(e, lo, mid, cancel)?;
            lo = mid + 1;
        } else {
            quicksort(e, mid + 1, hi, cancel)?;
            hi = mid;
        }
    }

    Ok(())
}

/// Lomuto partition of `lo..hi` around the element at `hi - 1`.
///
/// After the call every element left of the returned index compares less than the pivot, the
/// pivot sits at the returned index, and everything right of it compared not-less. Elements
/// equal to the pivot are never moved left, which is why the sort is not stable.
///
/// Requires `hi - lo >= 2`.
fn partition<E>(e: &mut E, lo: usize, hi: usize) -> usize
where
    E: Elements + ?Sized,
{
    let pivot = hi - 1;
    let mut boundary = lo;

    for scan in lo..pivot {
        if e.is_less(scan, pivot) {
            if boundary != scan {
                e.swap(boundary, scan);
            }
            boundary += 1;
        }
    }

    if boundary != pivot {
        e.swap(boundary, pivot);
    }

    boundary
}
