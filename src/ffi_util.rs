use std::any::Any;
use std::cell::Cell;
use std::cmp::Ordering;
use std::ffi::{c_int, c_void};
use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use lomuto::{lomuto_qsort, LOMUTO_OK};

// `lomuto_qsort` hands the comparator two element pointers and nothing else, so the Rust
// closure travels next to the call in a thread local.
thread_local! {
    static CMP_FN_CTX: Cell<*mut u8> = const { Cell::new(ptr::null_mut()) };
}

struct CompareCtx<F> {
    compare: F,
    panic: Option<Box<dyn Any + Send + 'static>>,
}

/// Calls the closure stored for the current thread.
///
/// A panic must not unwind into the C frame, it is caught and kept in the context. Every later
/// call on the same context answers "equal" without calling the closure again.
unsafe extern "C" fn rust_fn_cmp<T, F>(a: *const c_void, b: *const c_void) -> c_int
where
    F: FnMut(&T, &T) -> Ordering,
{
    let ctx = &mut *CMP_FN_CTX.with(Cell::get).cast::<CompareCtx<F>>();

    if ctx.panic.is_some() {
        return 0;
    }

    let (a, b) = (&*a.cast::<T>(), &*b.cast::<T>());
    match panic::catch_unwind(AssertUnwindSafe(|| (ctx.compare)(a, b))) {
        Ok(ord) => ord as c_int,
        Err(payload) => {
            tracing::debug!("panic during compare call, finishing the sort without it");
            ctx.panic = Some(payload);
            0
        }
    }
}

/// Sorts `v` by `compare` through the C entry point.
///
/// A panic raised by `compare` resumes once `lomuto_qsort` has returned, at which point `v`
/// still holds all of its original elements.
pub fn c_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ctx = CompareCtx {
        compare,
        panic: None,
    };
    let ctx_ptr: *mut CompareCtx<F> = &mut ctx;

    // Restored afterwards, `compare` may itself sort through this path.
    let prev_ctx = CMP_FN_CTX.with(|cell| cell.replace(ctx_ptr.cast()));

    // SAFETY: `v` is exclusively borrowed and the elements are aligned for `T`. The context
    // outlives the call and is only reached through `ctx_ptr` meanwhile.
    let status = unsafe {
        lomuto_qsort(
            v.as_mut_ptr().cast(),
            v.len(),
            mem::size_of::<T>(),
            Some(rust_fn_cmp::<T, F>),
        )
    };

    CMP_FN_CTX.with(|cell| cell.set(prev_ctx));

    if let Some(payload) = ctx.panic.take() {
        panic::resume_unwind(payload);
    }

    if status != LOMUTO_OK {
        panic!("lomuto_qsort rejected a slice: status {status}");
    }
}
