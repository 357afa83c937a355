//! Firmware image to COE conversion library.
//!
//! This crate turns a raw binary firmware image into the textual COE
//! (coefficient) format that FPGA toolchains consume to preload block RAM. It
//! provides:
//! 1. **Format:** The COE document model and its rendering rules (radix
//!    header, vector declaration, one lowercase hex token per byte).
//! 2. **Conversion:** A single-pass file-to-file converter with an explicit
//!    error contract.
//! 3. **Errors:** The discriminated error type separating a missing input
//!    from any other I/O failure.

/// COE document model and rendering.
pub mod coe;
/// Single-pass file-to-file conversion.
pub mod convert;
/// Converter error type.
pub mod error;

/// COE text document over a borrowed byte image; renders via [`std::fmt::Display`].
pub use crate::coe::CoeDocument;
/// Converts a raw binary file into a COE document on disk.
pub use crate::convert::convert;
/// Error kinds produced by [`convert()`].
pub use crate::error::ConvertError;
