use log::debug;

use super::ContentError;

/// The dimensions of a rectangle.
///
/// Both dimensions are finite and strictly positive, which is checked on creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f64,
    h: f64,
}

impl Size {
    /// Create a `Size` from a width and a height.
    ///
    /// # Errors
    /// Will return `ContentError::InvalidDimension` if `w` or `h` is not a finite positive number.
    pub fn new(w: f64, h: f64) -> Result<Self, ContentError> {
        Ok(Self {
            w: check_dimension("width", w)?,
            h: check_dimension("height", h)?,
        })
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.w
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.h
    }

    /// Ratio `width / height`. A value above 1 means the rectangle is wider than tall.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.w / self.h
    }
}

impl TryFrom<(f64, f64)> for Size {
    type Error = ContentError;

    fn try_from((w, h): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(w, h)
    }
}

/// Reject zero, negative and non finite dimensions.
pub(super) fn check_dimension(name: &'static str, value: f64) -> Result<f64, ContentError> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        debug!("rejected {name} = {value}");
        Err(ContentError::InvalidDimension { name, value })
    }
}
