//! This crate provides two small numeric helpers for user interfaces:
//!
//! - [`format_size`] writes a byte count in a human readable way, scaled by
//!   powers of 1024 and labelled with French units (`o`, `ko`, `Mo`, ...).
//! - [`fit_rectangle`] scales a rectangle to the largest size that fits inside
//!   another one while keeping its aspect ratio ("contain" fit).
//!
//! ## Example code
//!
//! ```
//! assert_eq!(sizefit::format_size(1024.).unwrap(), "1 ko");
//! assert_eq!(sizefit::format_size(1536.).unwrap(), "1,5 ko");
//!
//! let (w, h, scale) = sizefit::fit_rectangle(100., 50., 200., 200.).unwrap();
//! assert_eq!((w, h, scale), (200., 100., 2.));
//! ```
//!
//! Both functions are pure. Invalid inputs (zero, negative or non finite
//! values) are reported as errors instead of producing `NaN` results.

pub mod bytesize;
pub mod content;
mod errors;
pub mod number;
mod util;

pub use bytesize::{format_size, format_size_with, SizeError, Unit};
pub use content::{fit_rectangle, Binding, ContentError, Fit, Size};
pub use errors::SizefitError;
pub use number::{format_number, NumberFormat};
