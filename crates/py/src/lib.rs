//! Python bindings for the fibonacci computation.
//!
//! Build with `maturin develop` from this directory, then `import fibext`.

use pyo3::prelude::*;

/// Returns the n-th number in the fibonacci sequence.
///
/// Results past index 93 wrap modulo 2**64.
#[pyfunction]
fn fibonacci(py: Python<'_>, n: u64) -> u64 {
    py.allow_threads(|| fibext_core::fibonacci(n))
}

/// Native fibonacci numbers: returns the n-th number in the fibonacci sequence.
#[pymodule]
fn fibext(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fibonacci, m)?)?;
    Ok(())
}
