// ============================================================================
// Candidate Input
// Line-oriented decoding of candidate literals from a byte stream
// ============================================================================

use std::io::{self, BufRead};

/// Read one candidate per line.
///
/// Lines are split on `\n` and decoded lossily, so bytes that are not UTF-8
/// turn into a candidate that fails validation instead of ending the read.
/// A single trailing `\r` is left in place; enable candidate trimming to
/// accept CRLF input.
///
/// # Errors
/// Only genuine read failures from `reader` are returned.
pub fn read_candidates<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect()
}
