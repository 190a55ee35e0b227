// ============================================================================
// Sum File Example
// Adds a fixed counterparty to every line of a text file
// ============================================================================
//
// Usage:
//   cargo run --example sum_file -- numbers.txt [counterparty] [workers]
//   cargo run --example sum_file --features logging   (prompts for a filename)

use exact_decimal::engine::read_candidates;
use exact_decimal::prelude::*;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const DEFAULT_COUNTERPARTY: &str = "-123.456";

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = match args.next() {
        Some(name) => name,
        None => prompt("Enter filename: ")?,
    };
    let counterparty = args.next().unwrap_or_else(|| DEFAULT_COUNTERPARTY.to_string());
    let workers = match args.next() {
        Some(n) => n.parse()?,
        None => 1,
    };

    let adder = BatchAdderBuilder::new(counterparty)
        .parallel(workers)
        .trim_candidates()
        .build(Arc::new(LoggingEventHandler))?;

    let file = std::fs::File::open(&filename)?;
    let candidates = read_candidates(io::BufReader::new(file))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in adder.process_all(&candidates) {
        writeln!(out, "{}", outcome.render())?;
    }

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
