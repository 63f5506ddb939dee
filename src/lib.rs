mod core;

pub use crate::core::actions::escape_time::escape_time;
pub use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_grid::{FractalGrid, GridSummary};
pub use crate::core::data::grid_dimensions::{GridDimensions, GridSize};
pub use crate::core::data::pixel::Pixel;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::engine::errors::GridError;
pub use crate::core::engine::fractal_grid_engine::{EngineStatus, FractalGridEngine};
pub use crate::core::engine::options::{EngineOptions, Execution};
pub use crate::core::fractals::errors::FamilyError;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::JuliaSet;
pub use crate::core::fractals::julia::params::JuliaParams;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotSet, mandelbrot_framing};
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::core::util::pixel_to_plane::pixel_to_plane;
