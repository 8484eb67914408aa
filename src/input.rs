//! Manifest acquisition from standard input.
//!
//! The tool only works as a filter: input must come from a pipe or a
//! redirected file. Lines are collected verbatim, without trimming, so the
//! extractor sees exactly what the manifest contains.

use crate::error::{Error, Result};
use std::io::BufRead;

/// Rejects interactive input.
///
/// Callers pass `std::io::stdin().is_terminal()`.
pub fn ensure_piped(is_terminal: bool) -> Result<()> {
    if is_terminal {
        return Err(Error::NotPiped);
    }
    Ok(())
}

/// Reads every line from `reader`, stripping `\n` and `\r\n` terminators.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read. The first I/O error aborts the read; lines collected
/// so far are dropped.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| decode_line(&bytes)))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::ReadFailure)
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
