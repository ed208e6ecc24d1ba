use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cancellation signal, polled once before every partition step.
///
/// A cancelled sort leaves the buffer as some permutation of the original elements. An exchange
/// of two elements is never interrupted, so no element is ever half-copied.
pub trait Cancel {
    fn is_cancelled(&self) -> bool;
}

/// The signal that never fires. Used by every surface that has no cancellation parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Cancel for Never {
    #[inline(always)]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancel for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<C: Cancel + ?Sized> Cancel for &C {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<C: Cancel + ?Sized> Cancel for Arc<C> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
