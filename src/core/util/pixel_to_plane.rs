use crate::core::data::complex::Complex;
use crate::core::data::grid_dimensions::GridSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::viewport::Viewport;

/// Maps a pixel onto the viewport. Pixel `(0, 0)` lands on `(xmin, ymin)`;
/// the far edge `(width, height)` would land on `(xmax, ymax)` but is never
/// part of the grid.
#[must_use]
pub fn pixel_to_plane(pixel: Pixel, size: GridSize, viewport: Viewport) -> Complex {
    debug_assert!(
        pixel.ix < size.width() && pixel.iy < size.height(),
        "pixel {:?} outside {}x{} grid",
        pixel,
        size.width(),
        size.height()
    );

    let real = pixel.ix as f64 / size.width() as f64 * viewport.width() + viewport.xmin();
    let imag = pixel.iy as f64 / size.height() as f64 * viewport.height() + viewport.ymin();

    Complex { real, imag }
}
