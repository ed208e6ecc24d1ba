//! Testbed that exposes every entry point of `lomuto` behind the common [`Sort`] interface, so
//! the shared test suite and the benchmarks can drive them the same way as the std baseline.

pub use sort_test_tools::{patterns, Sort};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod ffi_util;

pub mod unstable;
