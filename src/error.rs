//! Error types for the extraction pipeline.

use thiserror::Error;

/// Fatal conditions that abort a run.
///
/// Lines without an image marker are not errors; they are dropped by the
/// filter or resolve to an empty reference.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input is attached to a terminal instead of a pipe or file.
    #[error("no pipe: expected a manifest on standard input, e.g. `cat deploy.yaml | manifest-images`")]
    NotPiped,

    /// Reading a line from the input stream failed.
    #[error("failed to read manifest from standard input")]
    ReadFailure(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
