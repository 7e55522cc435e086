use log::trace;

use super::{size::check_dimension, ContentError, Size};

/// Side of the destination that the fitted rectangle fills exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The source is relatively wider than the destination: widths match.
    Width,
    /// The source is relatively taller than the destination: heights match.
    Height,
}

/// Result of fitting a rectangle inside another one while keeping its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    size: Size,
    scale: f64,
    binding: Binding,
}

impl Fit {
    /// Dimensions of the scaled rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Uniform scale factor applied to the source.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Which side of the destination is filled.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        self.binding
    }

    /// Offset `(x, y)` placing the fitted rectangle at the center of `dest`.
    ///
    /// Fitting never positions the result; this is for callers who want it centered.
    #[must_use]
    pub fn centered_in(&self, dest: &Size) -> (f64, f64) {
        (
            (dest.width() - self.size.width()) / 2.,
            (dest.height() - self.size.height()) / 2.,
        )
    }
}

impl From<Fit> for (f64, f64, f64) {
    fn from(fit: Fit) -> Self {
        (fit.size.width(), fit.size.height(), fit.scale)
    }
}

impl Size {
    /// Scale `self` to the largest size that fits inside `dest` without changing its aspect ratio.
    ///
    /// # Errors
    /// Will return `ContentError::UnrepresentableFit` if the scaled dimensions overflow to
    /// infinity or underflow to zero.
    pub fn fit_into(&self, dest: &Self) -> Result<Fit, ContentError> {
        let (scale, binding) = if self.aspect_ratio() >= dest.aspect_ratio() {
            (dest.width() / self.width(), Binding::Width)
        } else {
            (dest.height() / self.height(), Binding::Height)
        };
        trace!("fit {self:?} into {dest:?}: {binding:?} bound, scale {scale}");

        let size = Self::new(self.width() * scale, self.height() * scale)
            .map_err(|_| ContentError::UnrepresentableFit { scale })?;

        Ok(Fit {
            size,
            scale,
            binding,
        })
    }
}

/// Compute the "contain" fit of a `sw`x`sh` rectangle inside a `dw`x`dh` one.
///
/// Returns the new width, the new height and the scale ratio applied to the source.
///
/// # Errors
/// Will return `ContentError::InvalidDimension` if one of the values is not a finite positive number.
/// Will return `ContentError::UnrepresentableFit` if the ratio between source and destination is
/// too extreme for the result to be finite and positive.
#[profiling::function]
pub fn fit_rectangle(sw: f64, sh: f64, dw: f64, dh: f64) -> Result<(f64, f64, f64), ContentError> {
    let src = Size::new(check_dimension("sw", sw)?, check_dimension("sh", sh)?)?;
    let dest = Size::new(check_dimension("dw", dw)?, check_dimension("dh", dh)?)?;

    Ok(src.fit_into(&dest)?.into())
}
