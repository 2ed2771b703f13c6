use thiserror::Error;

use crate::MAX_EXACT_INDEX;

/// Errors from the checked fibonacci entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    #[error(
        "fibonacci({n}) does not fit in 64 bits (largest exact index is {max})",
        max = MAX_EXACT_INDEX
    )]
    Overflow { n: u64 },
}
