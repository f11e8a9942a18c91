//! # Error types
//!
//! Typed errors returned by the codec core. Presentation (colored output,
//! path context) is layered on by the handler, not here.

use crate::constants::MAX_FILE_SUFFIX;
use thiserror::Error;

/// Errors produced while encoding into or decoding from a BMP carrier.
///
/// Every variant is terminal for the current operation: nothing is retried
/// and a partially written output must be discarded by the caller.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The carrier file does not begin with the `BM` signature.
    #[error("not a BMP image: file does not begin with the 'BM' signature")]
    BadSignature,

    /// The carrier ends before the 54-byte BMP header does.
    #[error("carrier image is truncated: shorter than the 54-byte BMP header")]
    TruncatedHeader,

    /// The pixel data cannot hold the framed payload.
    #[error(
        "image too small: the frame needs {required_bits} hidden bits but the pixel \
         data offers only {capacity_bytes} carrier bytes (one bit each)"
    )]
    Capacity {
        required_bits: u64,
        capacity_bytes: u64,
    },

    /// The carrier ran out of pixel bytes in the middle of a frame step.
    #[error("carrier data exhausted: frame step needs {needed} bytes, only {remaining} remain")]
    CarrierExhausted { needed: usize, remaining: usize },

    /// The pixel data does not start with the magic marker.
    #[error("no hidden payload: magic marker not found in the pixel data")]
    MarkerMismatch,

    /// An extension length outside the frame's fixed bound.
    #[error("extension length {0} exceeds the {max}-character maximum", max = MAX_FILE_SUFFIX)]
    ExtensionTooLong(u32),

    /// The embedded extension bytes are not text.
    #[error("embedded extension is not valid UTF-8")]
    InvalidExtension,

    /// A decoded payload length larger than the carrier could possibly hold.
    #[error(
        "declared payload length {declared} exceeds the {available} bytes the \
         remaining carrier data can deliver"
    )]
    PayloadTooLarge { declared: u32, available: usize },
}
