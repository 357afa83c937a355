//! Single-pass firmware-image conversion.
//!
//! This module performs the whole conversion: probe the input path, read the
//! image into memory, render the COE document, and write it out. It provides:
//! 1. **Existence check:** A missing input fails before the output is
//!    touched.
//! 2. **Whole-file I/O:** The image is read and the document written in one
//!    operation each; file handles close on every exit path.
//! 3. **No retries:** A single pass, single attempt; any error is terminal
//!    for the run.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::coe::CoeDocument;
use crate::error::ConvertError;

/// Converts the raw binary at `input` into a COE document at `output`.
///
/// The output file is created if absent and overwritten if present. When the
/// input is missing, the output is neither created nor modified. Partial
/// writes are not rolled back; a failed write leaves whatever the failing
/// operation left behind for downstream tooling to reject.
///
/// # Errors
///
/// Returns [`ConvertError::InputNotFound`] when `input` does not resolve to a
/// file, and [`ConvertError::Io`] for any other failure during read or write.
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    if fs::metadata(input).is_err() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let image = fs::read(input)?;
    debug!(path = %input.display(), bytes = image.len(), "read firmware image");

    let document = CoeDocument::new(&image);
    let rendered = document.to_string();
    debug!(tokens = document.token_count(), "rendered coe document");

    fs::write(output, &rendered)?;
    debug!(path = %output.display(), bytes = rendered.len(), "wrote coe document");

    Ok(())
}
