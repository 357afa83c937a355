//! COE document model and rendering.
//!
//! This module defines the textual memory-initialization format emitted by the
//! converter. It provides:
//! 1. **Header lines:** The fixed radix declaration and the vector
//!    introduction line.
//! 2. **Tokens:** One two-digit lowercase hexadecimal token per image byte,
//!    one token per line.
//! 3. **Terminators:** A comma after every token except the last, which closes
//!    the vector with a semicolon.

use std::fmt;

/// Header line fixing the token radix to hexadecimal.
pub const RADIX_LINE: &str = "memory_initialization_radix=16;";

/// Declaration line introducing the initialization vector.
pub const VECTOR_LINE: &str = "memory_initialization_vector=";

/// A COE document over a borrowed byte image.
///
/// Rendering happens through [`fmt::Display`]: the two header lines followed
/// by one token line per byte, every line newline-terminated. An empty image
/// renders the header lines only, with no trailing separator of any kind.
///
/// # Examples
///
/// ```
/// use bin2coe_core::CoeDocument;
///
/// let doc = CoeDocument::new(&[0x00, 0x0a, 0xff]);
/// assert_eq!(
///     doc.to_string(),
///     "memory_initialization_radix=16;\n\
///      memory_initialization_vector=\n\
///      00,\n\
///      0a,\n\
///      ff;\n",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoeDocument<'a> {
    image: &'a [u8],
}

impl<'a> CoeDocument<'a> {
    /// Creates a document over the given byte image.
    pub const fn new(image: &'a [u8]) -> Self {
        Self { image }
    }

    /// Returns the number of tokens the document renders (one per byte).
    pub const fn token_count(&self) -> usize {
        self.image.len()
    }
}

impl fmt::Display for CoeDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RADIX_LINE}")?;
        writeln!(f, "{VECTOR_LINE}")?;
        for (i, byte) in self.image.iter().enumerate() {
            let terminator = if i + 1 == self.image.len() { ';' } else { ',' };
            writeln!(f, "{byte:02x}{terminator}")?;
        }
        Ok(())
    }
}
