//! Custom error types.

use thiserror::Error;

/// A type representing errors that are specific to `sizefit`. Each module
/// returns its own error, this one gathers them for callers using both.
#[derive(Debug, Error)]
pub enum SizefitError {
    /// Error while formatting a byte size
    #[error("Byte size formatting failed")]
    Size(#[from] crate::bytesize::SizeError),

    /// Error while fitting a rectangle
    #[error("Rectangle fitting failed")]
    Content(#[from] crate::content::ContentError),
}
