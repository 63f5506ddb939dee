use crate::core::data::grid_dimensions::GridSize;
use crate::core::data::pixel::Pixel;
use crate::core::engine::errors::GridError;

/// The per-family strategy consumed by the grid engine: given a pixel of a
/// validated grid, report how many recurrence applications it took to escape.
///
/// Families own their recurrence, starting value and coordinate mapping.
/// Caching and size validation belong to the engine alone.
pub trait FractalFamily {
    fn name(&self) -> &'static str;

    /// Iteration cap used to normalize counts into ratios. Never zero.
    fn max_iterations(&self) -> u32;

    /// Iteration count for `pixel`, in `0..=max_iterations()`.
    ///
    /// Families that do not provide a recurrence fail here, so the engine
    /// refuses to produce a grid for them.
    fn iterations(&self, _pixel: Pixel, _size: GridSize) -> Result<u32, GridError> {
        Err(GridError::UnimplementedFamily {
            family: self.name(),
        })
    }
}

impl<F: FractalFamily + ?Sized> FractalFamily for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn max_iterations(&self) -> u32 {
        (**self).max_iterations()
    }

    fn iterations(&self, pixel: Pixel, size: GridSize) -> Result<u32, GridError> {
        (**self).iterations(pixel, size)
    }
}
