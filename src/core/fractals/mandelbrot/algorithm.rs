use crate::core::actions::escape_time::escape_time;
use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
use crate::core::data::complex::Complex;
use crate::core::data::grid_dimensions::GridSize;
use crate::core::data::pixel::Pixel;
use crate::core::engine::errors::GridError;
use crate::core::fractals::mandelbrot::params::{ESCAPE_RADIUS, MandelbrotParams};

/// Fixed framing for the classic Mandelbrot view. Both axes are scaled by a
/// quarter of the grid width; the origin sits at `(0.75 * width, width / 4)`.
#[must_use]
pub fn mandelbrot_framing(pixel: Pixel, size: GridSize) -> Complex {
    let width = size.width() as f64;
    let scale = width / 4.0;

    Complex {
        real: (pixel.ix as f64 - 0.75 * width) / scale,
        imag: (pixel.iy as f64 - scale) / scale,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct MandelbrotSet {
    params: MandelbrotParams,
}

impl MandelbrotSet {
    pub fn new(params: MandelbrotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> MandelbrotParams {
        self.params
    }
}

impl FractalFamily for MandelbrotSet {
    fn name(&self) -> &'static str {
        "Mandelbrot"
    }

    fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }

    fn iterations(&self, pixel: Pixel, size: GridSize) -> Result<u32, GridError> {
        let c0 = mandelbrot_framing(pixel, size);

        Ok(escape_time(
            Complex::ZERO,
            ESCAPE_RADIUS,
            self.params.max_iterations(),
            |z| z * z + c0,
        ))
    }
}
