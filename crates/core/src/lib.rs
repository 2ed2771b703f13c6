//! Fibonacci numbers over fixed-width `u64` arithmetic.
//!
//! Everything here is pure: no state survives between calls, so every
//! function may be called from any number of threads at once. Results past
//! [`MAX_EXACT_INDEX`] wrap modulo 2^64 unless the checked entry point is used.

pub mod computer;
pub mod errors;
pub mod sequence;

pub use computer::{FibonacciComputer, Iterative, Recursive, Variant};
pub use errors::FibError;
pub use sequence::{Sequence, sequence};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_EXACT_INDEX: u64 = 93;

/// Returns the n-th number in the fibonacci sequence.
///
/// Uses constant stack space. Wraps modulo 2^64 for `n > MAX_EXACT_INDEX`.
pub fn fibonacci(n: u64) -> u64 {
    Iterative.compute(n)
}

/// Same contract as [`fibonacci`], computed by naive recursion.
///
/// Exponential time and recursion depth `n`; only sensible for small inputs.
pub fn fibonacci_recursive(n: u64) -> u64 {
    Recursive.compute(n)
}

/// Returns the n-th fibonacci number, or an error if it does not fit in a `u64`.
pub fn checked_fibonacci(n: u64) -> Result<u64, FibError> {
    if n > MAX_EXACT_INDEX {
        return Err(FibError::Overflow { n });
    }
    Ok(fibonacci(n))
}
