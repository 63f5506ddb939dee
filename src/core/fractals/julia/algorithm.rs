use crate::core::actions::escape_time::escape_time;
use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
use crate::core::data::grid_dimensions::GridSize;
use crate::core::data::pixel::Pixel;
use crate::core::data::viewport::Viewport;
use crate::core::engine::errors::GridError;
use crate::core::fractals::julia::params::JuliaParams;
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Julia set for a fixed constant `c`: each pixel's plane coordinate is the
/// starting value of `z -> z² + c`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct JuliaSet {
    params: JuliaParams,
    viewport: Viewport,
}

impl JuliaSet {
    pub fn new(params: JuliaParams, viewport: Viewport) -> Self {
        Self { params, viewport }
    }

    pub fn params(&self) -> JuliaParams {
        self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl FractalFamily for JuliaSet {
    fn name(&self) -> &'static str {
        "Julia"
    }

    fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }

    fn iterations(&self, pixel: Pixel, size: GridSize) -> Result<u32, GridError> {
        let c = self.params.c();
        let z0 = pixel_to_plane(pixel, size, self.viewport);

        Ok(escape_time(
            z0,
            self.params.zabs_max(),
            self.params.max_iterations(),
            |z| z * z + c,
        ))
    }
}
