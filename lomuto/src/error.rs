use std::ffi::c_int;

use thiserror::Error;

/// Status code returned by [`lomuto_qsort`](crate::lomuto_qsort) on success.
pub const LOMUTO_OK: c_int = 0;

/// Status code returned by [`lomuto_qsort`](crate::lomuto_qsort) when a precondition was
/// violated. Same value as POSIX `EINVAL`.
pub const LOMUTO_EINVAL: c_int = 22;

/// Status code returned when a sort was stopped by its cancellation signal. Never produced by
/// the C entry point, which has no cancellation signal.
pub const LOMUTO_ECANCELED: c_int = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("sort cancelled before completion")]
    Cancelled,
}

/// The precondition a call violated. All of these are detected before the buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("buffer is null but {count} elements of {size} bytes were requested")]
    NullBuffer { count: usize, size: usize },

    #[error("no comparator supplied for {count} elements")]
    MissingComparator { count: usize },

    #[error("{count} elements of {size} bytes overflow the addressable extent")]
    ExtentOverflow { count: usize, size: usize },

    #[error("buffer holds {len} bytes but {required} are required")]
    BufferTooShort { len: usize, required: usize },
}

impl SortError {
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SortError::InvalidArgument(_))
    }

    /// Maps the error onto the status codes of the C entry point.
    #[must_use]
    pub fn status_code(&self) -> c_int {
        match self {
            SortError::InvalidArgument(_) => LOMUTO_EINVAL,
            SortError::Cancelled => LOMUTO_ECANCELED,
        }
    }
}
