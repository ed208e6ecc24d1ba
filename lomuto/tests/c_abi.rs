use std::cmp::Ordering;
use std::ffi::{c_int, c_void};
use std::ptr;

use lomuto::{lomuto_qsort, LOMUTO_EINVAL, LOMUTO_OK};
use sort_test_tools::patterns;
use sort_test_tools::types::Rect;

unsafe extern "C" fn cmp_i32(a: *const c_void, b: *const c_void) -> c_int {
    let a = *(a as *const i32);
    let b = *(b as *const i32);

    // Not `a - b`, that overflows for the extremes.
    (a > b) as c_int - (a < b) as c_int
}

unsafe extern "C" fn cmp_packed_key(a: *const c_void, b: *const c_void) -> c_int {
    let a = (a as *const u64).read_unaligned() as u32 as i32;
    let b = (b as *const u64).read_unaligned() as u32 as i32;

    (a > b) as c_int - (a < b) as c_int
}

// Same shape as a packer's height comparator: taller first, then wider first.
unsafe extern "C" fn rect_height_compare(a: *const c_void, b: *const c_void) -> c_int {
    let p = &*(a as *const Rect);
    let q = &*(b as *const Rect);

    if p.h > q.h {
        return -1;
    }
    if p.h < q.h {
        return 1;
    }
    if p.w > q.w {
        -1
    } else {
        (p.w < q.w) as c_int
    }
}

#[test]
fn sorts_ints() {
    let mut v = [5, 3, 1, 4, 2, i32::MIN, i32::MAX];
    let status = unsafe {
        lomuto_qsort(
            v.as_mut_ptr().cast(),
            v.len(),
            std::mem::size_of::<i32>(),
            Some(cmp_i32),
        )
    };

    assert_eq!(status, LOMUTO_OK);
    assert_eq!(v, [i32::MIN, 1, 2, 3, 4, 5, i32::MAX]);
}

#[test]
fn rects_by_height_then_width() {
    let mut rects = [
        Rect::new(0, 4, 2),
        Rect::new(1, 8, 8),
        Rect::new(2, 3, 2),
        Rect::new(3, 9, 1),
        Rect::new(4, 8, 8),
        Rect::new(5, 5, 2),
    ];

    let status = unsafe {
        lomuto_qsort(
            rects.as_mut_ptr().cast(),
            rects.len(),
            std::mem::size_of::<Rect>(),
            Some(rect_height_compare),
        )
    };
    assert_eq!(status, LOMUTO_OK);

    let dims = rects.map(|r| (r.h, r.w));
    assert_eq!(dims, [(8, 8), (8, 8), (2, 5), (2, 4), (2, 3), (1, 9)]);
    assert!(rects
        .windows(2)
        .all(|w| Rect::height_desc(&w[0], &w[1]) != Ordering::Greater));
}

#[test]
fn tie_order_matches_typed_surface() {
    let keys = patterns::random_uniform(1_000, 0..16);
    let orig: Vec<u64> = keys
        .iter()
        .enumerate()
        .map(|(i, &k)| (k as u32 as u64) | ((i as u64) << 32))
        .collect();

    let mut typed = orig.clone();
    lomuto::sort_by(&mut typed, |a, b| (*a as u32 as i32).cmp(&(*b as u32 as i32)));

    let mut c = orig;
    let status = unsafe { lomuto_qsort(c.as_mut_ptr().cast(), c.len(), 8, Some(cmp_packed_key)) };

    assert_eq!(status, LOMUTO_OK);
    assert_eq!(c, typed);
}

#[test]
fn missing_comparator() {
    let mut v = [2, 1];
    let status = unsafe { lomuto_qsort(v.as_mut_ptr().cast(), 2, 4, None) };

    assert_eq!(status, LOMUTO_EINVAL);
    assert_eq!(v, [2, 1]);

    // One element never needs a comparator.
    let mut v = [2];
    assert_eq!(
        unsafe { lomuto_qsort(v.as_mut_ptr().cast(), 1, 4, None) },
        LOMUTO_OK
    );
}

#[test]
fn null_base() {
    let status = unsafe { lomuto_qsort(ptr::null_mut(), 3, 4, Some(cmp_i32)) };
    assert_eq!(status, LOMUTO_EINVAL);

    assert_eq!(
        unsafe { lomuto_qsort(ptr::null_mut(), 0, 4, Some(cmp_i32)) },
        LOMUTO_OK
    );
    assert_eq!(
        unsafe { lomuto_qsort(ptr::null_mut(), 0, 0, None) },
        LOMUTO_OK
    );
}

#[test]
fn overflowing_extent() {
    let mut v = [2, 1];
    let status = unsafe { lomuto_qsort(v.as_mut_ptr().cast(), usize::MAX, 4, Some(cmp_i32)) };

    assert_eq!(status, LOMUTO_EINVAL);
    assert_eq!(v, [2, 1]);
}

#[test]
fn zero_size_elements() {
    let mut v = [0u8; 4];
    let status = unsafe { lomuto_qsort(v.as_mut_ptr().cast(), 1_000, 0, Some(cmp_i32)) };

    assert_eq!(status, LOMUTO_OK);
}
