use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
use crate::core::data::grid_dimensions::GridSize;
use crate::core::data::pixel::Pixel;
use crate::core::engine::errors::GridError;

/// Pixel at storage position `index` of a grid laid out column-major by `ix`.
#[inline]
pub(crate) fn pixel_at(index: usize, size: GridSize) -> Pixel {
    Pixel {
        ix: index / size.height(),
        iy: index % size.height(),
    }
}

/// Evaluates every pixel on the calling thread, in storage order.
pub fn generate_grid<F>(size: GridSize, family: &F) -> Result<Vec<u32>, GridError>
where
    F: FractalFamily + ?Sized,
{
    (0..size.pixel_count())
        .map(|index| family.iterations(pixel_at(index, size), size))
        .collect()
}
