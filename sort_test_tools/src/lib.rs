use std::cmp::Ordering;

/// A sort implementation under test or benchmark.
pub trait Sort {
    fn name() -> String;

    /// Whether the implementation promises to keep equal elements in input order. Tests that
    /// assert stability are skipped for implementations that return `false`.
    fn is_stable() -> bool {
        false
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod types;
