use core::cmp::{self, Ordering};
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::cancel::{Cancel, Never};
use crate::error::{ArgumentError, SortError};
use crate::quicksort::{self, Elements};

/// Bytes exchanged per step when swapping two elements. Larger elements are exchanged in chunks
/// so the scratch space stays fixed regardless of the element size.
const SWAP_SCRATCH_LEN: usize = 64;

/// A validated `count * size` description of a buffer.
///
/// Construction fails if the extent can't be addressed, so every element offset derived from a
/// layout fits in `isize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLayout {
    count: usize,
    size: usize,
    extent: usize,
}

impl ElementLayout {
    pub fn new(count: usize, size: usize) -> Result<Self, SortError> {
        let extent = count
            .checked_mul(size)
            .filter(|&extent| extent <= isize::MAX as usize)
            .ok_or(ArgumentError::ExtentOverflow { count, size })?;

        Ok(Self {
            count,
            size,
            extent,
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bytes covered by the elements.
    #[must_use]
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Zero or one element, or elements without payload. Nothing to reorder.
    #[must_use]
    pub fn is_trivially_sorted(&self) -> bool {
        self.count < 2 || self.size == 0
    }
}

/// Fixed-stride storage behind a raw pointer.
struct Strided<F> {
    base: *mut u8,
    size: usize,
    compare: F,
}

impl<F> Strided<F> {
    /// # Safety
    ///
    /// `index` must be below the element count of the layout `base` was validated against.
    #[inline(always)]
    unsafe fn elem(&self, index: usize) -> *mut u8 {
        self.base.add(index * self.size)
    }
}

impl<F> Elements for Strided<F>
where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    #[inline]
    fn is_less(&mut self, a: usize, b: usize) -> bool {
        // SAFETY: the driver only passes indices inside the validated layout.
        let (a, b) = unsafe { (self.elem(a), self.elem(b)) };
        (self.compare)(a, b) == Ordering::Less
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        // SAFETY: indices are in bounds and distinct, so the two slots don't overlap.
        unsafe { swap_bytes(self.elem(a), self.elem(b), self.size) }
    }
}

/// Exchanges `size` bytes between `a` and `b`.
///
/// The copies are untyped, so padding or otherwise uninitialized bytes inside an element are
/// carried over as they are.
///
/// # Safety
///
/// `a` and `b` must be valid for reads and writes of `size` bytes and must not overlap.
unsafe fn swap_bytes(a: *mut u8, b: *mut u8, size: usize) {
    let mut scratch = [MaybeUninit::<u8>::uninit(); SWAP_SCRATCH_LEN];
    let tmp = scratch.as_mut_ptr().cast::<u8>();

    let mut offset = 0;
    while offset < size {
        let chunk = cmp::min(SWAP_SCRATCH_LEN, size - offset);
        let a_chunk = a.add(offset);
        let b_chunk = b.add(offset);

        ptr::copy_nonoverlapping(a_chunk, tmp, chunk);
        ptr::copy_nonoverlapping(b_chunk, a_chunk, chunk);
        ptr::copy_nonoverlapping(tmp, b_chunk, chunk);

        offset += chunk;
    }
}

/// Sorts `count` elements of `size` bytes each, stored contiguously at `base`.
///
/// This is the type-erased form of [`sort_by`](crate::sort_by): elements are opaque, only ever
/// moved by whole-element byte exchange, and `compare` receives the address of each element
/// inside the buffer. No alignment beyond one byte is assumed, so `compare` must not read
/// through a typed reference unless it knows the buffer is suitably aligned.
///
/// Not stable. A `count` below two or a `size` of zero performs no comparisons and leaves the
/// buffer unchanged.
///
/// # Errors
///
/// [`SortError::InvalidArgument`] if `count * size` overflows, or `base` is null while
/// `count * size > 0`. The buffer is untouched in that case.
///
/// # Safety
///
/// If `count * size > 0`, `base` must be valid for reads and writes of `count * size` bytes
/// for the duration of the call and nothing else may access that memory meanwhile.
pub unsafe fn sort_raw<F>(
    base: *mut u8,
    count: usize,
    size: usize,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    try_sort_raw(base, count, size, compare, &Never)
}

/// [`sort_raw`] that stops with [`SortError::Cancelled`] once `cancel` fires.
///
/// # Safety
///
/// Same as [`sort_raw`].
pub unsafe fn try_sort_raw<F, C>(
    base: *mut u8,
    count: usize,
    size: usize,
    compare: F,
    cancel: &C,
) -> Result<(), SortError>
where
    F: FnMut(*const u8, *const u8) -> Ordering,
    C: Cancel + ?Sized,
{
    let layout = ElementLayout::new(count, size)?;

    if base.is_null() && layout.extent() > 0 {
        return Err(ArgumentError::NullBuffer { count, size }.into());
    }

    sort_layout(base, layout, compare, cancel)
}

/// Sorts `count` elements of `size` bytes each, held in the front of `buf`.
///
/// `compare` sees each element as a `size` byte slice. Bytes past `count * size` are left
/// untouched. See [`sort_raw`] for the ordering contract.
///
/// ```
/// // Two byte big-endian keys.
/// let mut buf = [0, 5, 0, 3, 0, 1, 0, 4, 0, 2];
/// lomuto::sort_bytes(&mut buf, 5, 2, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(buf, [0, 1, 0, 2, 0, 3, 0, 4, 0, 5]);
/// ```
///
/// # Errors
///
/// [`SortError::InvalidArgument`] if `count * size` overflows or exceeds `buf.len()`.
pub fn sort_bytes<F>(buf: &mut [u8], count: usize, size: usize, compare: F) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    try_sort_bytes(buf, count, size, compare, &Never)
}

/// [`sort_bytes`] that stops with [`SortError::Cancelled`] once `cancel` fires.
pub fn try_sort_bytes<F, C>(
    buf: &mut [u8],
    count: usize,
    size: usize,
    mut compare: F,
    cancel: &C,
) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
    C: Cancel + ?Sized,
{
    let layout = ElementLayout::new(count, size)?;

    if buf.len() < layout.extent() {
        return Err(ArgumentError::BufferTooShort {
            len: buf.len(),
            required: layout.extent(),
        }
        .into());
    }

    // SAFETY: `buf` is exclusively borrowed and covers the layout. The slices handed to
    // `compare` end before the next exchange.
    unsafe {
        sort_layout(
            buf.as_mut_ptr(),
            layout,
            |a, b| compare(slice::from_raw_parts(a, size), slice::from_raw_parts(b, size)),
            cancel,
        )
    }
}

/// # Safety
///
/// `base` must be valid for reads and writes of `layout.extent()` bytes.
unsafe fn sort_layout<F, C>(
    base: *mut u8,
    layout: ElementLayout,
    compare: F,
    cancel: &C,
) -> Result<(), SortError>
where
    F: FnMut(*const u8, *const u8) -> Ordering,
    C: Cancel + ?Sized,
{
    if layout.is_trivially_sorted() {
        return Ok(());
    }

    let mut elements = Strided {
        base,
        size: layout.size(),
        compare,
    };

    quicksort::quicksort(&mut elements, 0, layout.count(), cancel)
}
