//! Human readable byte sizes.
//!
//! Sizes are scaled by powers of 1024 and labelled with the French unit names
//! (`o`, `ko`, `Mo`, ...), the number itself is written with a [`NumberFormat`].
mod unit;

pub use unit::Unit;

use log::{debug, trace};
use thiserror::Error;

use crate::number::{round_to, NumberFormat};

/// Number of fractional digits kept when writing a size.
const SIZE_DECIMALS: u8 = 2;

/// Error for byte size formatting.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The byte count is zero, negative or not finite.
    #[error("Invalid byte count {0}: expected a finite positive number")]
    InvalidByteCount(f64),
}

/// Write `size` bytes in a human readable way, with French number formatting.
///
/// ```
/// assert_eq!(sizefit::format_size(1536.).unwrap(), "1,5 ko");
/// ```
///
/// # Errors
/// Will return `SizeError::InvalidByteCount` if `size` is not a finite positive number.
#[profiling::function]
pub fn format_size(size: f64) -> Result<String, SizeError> {
    format_size_with(size, &NumberFormat::FRENCH)
}

/// Write `size` bytes in a human readable way, using `format` for the number.
///
/// The value is rounded to two decimals before being written.
///
/// # Errors
/// Will return `SizeError::InvalidByteCount` if `size` is not a finite positive number.
pub fn format_size_with(size: f64, format: &NumberFormat) -> Result<String, SizeError> {
    if !size.is_finite() || size <= 0. {
        debug!("rejected byte count {size}");
        return Err(SizeError::InvalidByteCount(size));
    }

    let (unit, value) = Unit::for_byte_count(size);
    trace!("{size} bytes -> {value} {unit}");
    let number = format.format(round_to(value, SIZE_DECIMALS));
    Ok(format!("{number} {unit}"))
}
