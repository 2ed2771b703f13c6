use std::{io::BufWriter, time::Instant};

use clap::Parser;
use fibext_core::Variant;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod errors;
mod report;

#[derive(Parser, Debug)]
/// Command-line arguments for computing fibonacci numbers.
pub(crate) struct Opts {
    /// Indices into the fibonacci sequence (one or more)
    #[arg(value_name = "N", required = true)]
    indices: Vec<u64>,

    /// Algorithm to use: iterative or recursive
    #[arg(long, default_value = "iterative")]
    variant: Variant,

    /// Fail instead of wrapping when a value does not fit in 64 bits
    #[arg(long)]
    checked: bool,

    /// Print every term from F(0) up to F(N) for a single N
    #[arg(long)]
    sequence: bool,

    /// Emit a JSON array instead of plain lines
    #[arg(long)]
    json: bool,

    /// Largest index the recursive variant will be run on
    #[arg(long, default_value_t = 40)]
    max_recursive_index: u64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let opts = Opts::parse();

    let entries = report::evaluate(&opts)?;
    let out = BufWriter::new(std::io::stdout().lock());

    if opts.json {
        report::render_json(entries, out)?;
        info!("done in {:.2?}", start.elapsed());
    } else {
        let count = report::render_plain(entries, out)?;
        info!("computed {} value(s) in {:.2?}", count, start.elapsed());
    }

    Ok(())
}
