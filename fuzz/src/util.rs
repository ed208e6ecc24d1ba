use std::mem;
use std::ptr;

/// Reinterprets the front of `data` as `T` values, dropping the trailing partial element.
pub fn u8_as_x<T: Copy>(data: &[u8]) -> Vec<T> {
    let len = data.len() / mem::size_of::<T>();
    let mut v: Vec<T> = Vec::with_capacity(len);

    // SAFETY: `T: Copy` here is only ever a plain integer, every bit pattern is valid.
    unsafe {
        ptr::copy_nonoverlapping(
            data.as_ptr(),
            v.as_mut_ptr().cast::<u8>(),
            len * mem::size_of::<T>(),
        );
        v.set_len(len);
    }

    v
}
