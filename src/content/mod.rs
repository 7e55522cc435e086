//! Module for rectangle sizes and "contain" fitting.
mod fit;
mod size;

pub use fit::{fit_rectangle, Binding, Fit};
pub use size::Size;

use thiserror::Error;

/// Error for content
#[derive(Debug, Error)]
pub enum ContentError {
    /// A width or a height is zero, negative or not finite.
    #[error("Invalid dimension '{name}': {value} is not a finite positive number")]
    InvalidDimension {
        /// Name of the rejected argument.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The fitted rectangle overflows to infinity or underflows to zero.
    #[error("Fitted rectangle cannot be represented with scale {scale}")]
    UnrepresentableFit {
        /// Scale computed between source and destination.
        scale: f64,
    },
}
