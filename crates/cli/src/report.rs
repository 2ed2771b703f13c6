use std::io::Write;

use fibext_core::{FibError, FibonacciComputer, MAX_EXACT_INDEX, Variant, sequence};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{Opts, errors::CliError};

/// One computed value, as printed or serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub n: u64,
    pub value: u64,
    pub variant: &'static str,
}

/// Lazily computed entries, in output order.
pub type Entries = Box<dyn Iterator<Item = Entry>>;

/// Checks the caller-side limits for one index before anything is computed.
fn validate(opts: &Opts, n: u64) -> Result<(), CliError> {
    if opts.variant == Variant::Recursive && n > opts.max_recursive_index {
        return Err(CliError::RecursionLimit {
            n,
            limit: opts.max_recursive_index,
        });
    }
    if opts.checked && n > MAX_EXACT_INDEX {
        return Err(FibError::Overflow { n }.into());
    }
    Ok(())
}

/// Validates the requested indices and returns the entries to print.
///
/// With `--sequence` the terms are produced one at a time, so the output can
/// be streamed for an index of any size.
pub fn evaluate(opts: &Opts) -> Result<Entries, CliError> {
    let variant = opts.variant;
    let name = variant.as_str();

    if !opts.sequence {
        for &n in &opts.indices {
            validate(opts, n)?;
        }
        let indices = opts.indices.clone();
        return Ok(Box::new(indices.into_iter().map(move |n| {
            debug!(n, variant = name, "computing");
            Entry {
                n,
                value: variant.compute(n),
                variant: name,
            }
        })));
    }

    let last = match opts.indices.as_slice() {
        [last] => *last,
        _ => {
            return Err(CliError::InvalidArguments(
                "--sequence takes exactly one index".to_string(),
            ));
        }
    };
    validate(opts, last)?;
    let len = last.checked_add(1).ok_or_else(|| {
        CliError::InvalidArguments(format!("--sequence index {last} is too large"))
    })?;

    match variant {
        Variant::Iterative => Ok(Box::new(sequence(len).zip(0..len).map(
            move |(value, n)| Entry {
                n,
                value,
                variant: name,
            },
        ))),
        Variant::Recursive => Ok(Box::new((0..len).map(move |n| Entry {
            n,
            value: variant.compute(n),
            variant: name,
        }))),
    }
}

/// Writes entries as `fib(n) = value` lines. Returns how many were written.
pub fn render_plain<W: Write>(entries: Entries, mut out: W) -> std::io::Result<u64> {
    let mut count = 0;
    for entry in entries {
        writeln!(out, "fib({}) = {}", entry.n, entry.value)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Writes entries as one pretty-printed JSON array.
pub fn render_json<W: Write>(entries: Entries, mut out: W) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::pretty(&mut out);
    ser.collect_seq(entries)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    out.flush().map_err(serde_json::Error::io)
}
