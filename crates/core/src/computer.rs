use std::{fmt, str::FromStr};

/// Something that maps an index `n` to the n-th fibonacci number.
///
/// Implementations must be pure and agree on every input, including the
/// wrapped values past `MAX_EXACT_INDEX`.
pub trait FibonacciComputer {
    fn compute(&self, n: u64) -> u64;
}

/// Loop over an accumulator pair. Constant stack, linear time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Iterative;

impl FibonacciComputer for Iterative {
    fn compute(&self, n: u64) -> u64 {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
        a
    }
}

/// The textbook case split. Exponential time, recursion depth `n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recursive;

impl FibonacciComputer for Recursive {
    fn compute(&self, n: u64) -> u64 {
        match n {
            0 => 0,
            1 => 1,
            _ => self.compute(n - 1).wrapping_add(self.compute(n - 2)),
        }
    }
}

/// Runtime choice between the two computers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Iterative,
    Recursive,
}

impl Variant {
    pub fn computer(self) -> &'static dyn FibonacciComputer {
        match self {
            Variant::Iterative => &Iterative,
            Variant::Recursive => &Recursive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Iterative => "iterative",
            Variant::Recursive => "recursive",
        }
    }
}

impl FibonacciComputer for Variant {
    fn compute(&self, n: u64) -> u64 {
        self.computer().compute(n)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iterative" => Ok(Variant::Iterative),
            "recursive" => Ok(Variant::Recursive),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}
