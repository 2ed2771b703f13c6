//! C ABI for the fibonacci computation.
//!
//! Everything is passed by value as plain `u64`, so any host with a C FFI
//! (ctypes, node-ffi, JNI wrappers, ...) can call in without glue code.
//! The declarations live in `include/fibext.h`.

use fibext_core::{FibError, MAX_EXACT_INDEX, checked_fibonacci, fibonacci};

pub const FIBEXT_OK: i32 = 0;
pub const FIBEXT_OVERFLOW: i32 = 1;
pub const FIBEXT_NULL_POINTER: i32 = 2;

/// Returns the n-th number in the fibonacci sequence, wrapping past index 93.
#[unsafe(no_mangle)]
pub extern "C" fn fibext_fibonacci(n: u64) -> u64 {
    fibonacci(n)
}

/// Writes F(n) to `out` if it fits in 64 bits.
///
/// Returns `FIBEXT_OK`, `FIBEXT_OVERFLOW` (nothing written) or
/// `FIBEXT_NULL_POINTER`.
///
/// # Safety
/// `out` must be null or point to writable memory for one `u64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fibext_checked_fibonacci(n: u64, out: *mut u64) -> i32 {
    if out.is_null() {
        return FIBEXT_NULL_POINTER;
    }
    match checked_fibonacci(n) {
        Ok(value) => {
            unsafe { *out = value };
            FIBEXT_OK
        }
        Err(FibError::Overflow { .. }) => FIBEXT_OVERFLOW,
    }
}

/// Largest index accepted by `fibext_checked_fibonacci`.
#[unsafe(no_mangle)]
pub extern "C" fn fibext_max_exact_index() -> u64 {
    MAX_EXACT_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn unchecked_entry_point() {
        assert_eq!(fibext_fibonacci(0), 0);
        assert_eq!(fibext_fibonacci(19), 4181);
        assert_eq!(fibext_fibonacci(94), 1_293_530_146_158_671_551);
    }

    #[test]
    fn checked_writes_value() {
        let mut out = 0u64;
        let status = unsafe { fibext_checked_fibonacci(20, &mut out) };
        assert_eq!(status, FIBEXT_OK);
        assert_eq!(out, 6765);
    }

    #[test]
    fn checked_leaves_out_untouched_on_overflow() {
        let mut out = 42u64;
        let status = unsafe { fibext_checked_fibonacci(94, &mut out) };
        assert_eq!(status, FIBEXT_OVERFLOW);
        assert_eq!(out, 42);
    }

    #[test]
    fn checked_rejects_null() {
        let status = unsafe { fibext_checked_fibonacci(5, ptr::null_mut()) };
        assert_eq!(status, FIBEXT_NULL_POINTER);
    }

    #[test]
    fn max_exact_index_is_exposed() {
        let mut out = 0u64;
        let max = fibext_max_exact_index();
        assert_eq!(unsafe { fibext_checked_fibonacci(max, &mut out) }, FIBEXT_OK);
        assert_eq!(
            unsafe { fibext_checked_fibonacci(max + 1, &mut out) },
            FIBEXT_OVERFLOW
        );
    }
}
