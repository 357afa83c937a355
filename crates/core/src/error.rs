//! Converter error type.
//!
//! A conversion either succeeds or fails with one of two kinds: the input
//! image is missing, or some I/O operation failed along the way. The missing
//! input is split out so callers can point the user at the build step that
//! produces the image; everything else carries the underlying cause.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error kinds produced by a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input image does not exist at the given path.
    ///
    /// Raised before the output is created or modified.
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the input or writing the output failed; carries the cause.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}
