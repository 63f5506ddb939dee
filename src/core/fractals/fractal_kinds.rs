use crate::core::{
    actions::generate_grid::ports::fractal_family::FractalFamily,
    fractals::{julia::algorithm::JuliaSet, mandelbrot::algorithm::MandelbrotSet},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Julia,
    Mandelbrot,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Julia, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Julia => "Julia",
            Self::Mandelbrot => "Mandelbrot",
        }
    }

    /// The family for this kind with its default parameters.
    #[must_use]
    pub fn default_family(self) -> Box<dyn FractalFamily + Send + Sync> {
        match self {
            Self::Julia => Box::new(JuliaSet::default()),
            Self::Mandelbrot => Box::new(MandelbrotSet::default()),
        }
    }
}
