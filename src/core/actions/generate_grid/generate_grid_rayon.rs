use rayon::prelude::*;

use crate::core::actions::generate_grid::generate_grid::pixel_at;
use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
use crate::core::data::grid_dimensions::GridSize;
use crate::core::engine::errors::GridError;

/// Evaluates every pixel with rayon's work-stealing scheduler.
///
/// Pixels are independent, so the result is identical to
/// [`generate_grid`](super::generate_grid::generate_grid); only the
/// scheduling differs. The first failing pixel aborts the whole grid.
pub fn generate_grid_rayon<F>(size: GridSize, family: &F) -> Result<Vec<u32>, GridError>
where
    F: FractalFamily + Sync + ?Sized,
{
    (0..size.pixel_count())
        .into_par_iter()
        .map(|index| family.iterations(pixel_at(index, size), size))
        .collect()
}
