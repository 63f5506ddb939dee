use crate::core::{data::complex::Complex, fractals::errors::FamilyError};

pub const DEFAULT_C: Complex = Complex::new(-0.1, 0.65);
pub const DEFAULT_ZABS_MAX: f64 = 10.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    c: Complex,
    zabs_max: f64,
    max_iterations: u32,
}

impl JuliaParams {
    pub fn new(c: Complex, zabs_max: f64, max_iterations: u32) -> Result<Self, FamilyError> {
        if max_iterations == 0 {
            return Err(FamilyError::ZeroMaxIterationsError);
        }

        if !zabs_max.is_finite() || zabs_max <= 0.0 {
            return Err(FamilyError::InvalidThreshold {
                threshold: zabs_max,
            });
        }

        Ok(Self {
            c,
            zabs_max,
            max_iterations,
        })
    }

    pub fn c(&self) -> Complex {
        self.c
    }

    pub fn zabs_max(&self) -> f64 {
        self.zabs_max
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            zabs_max: DEFAULT_ZABS_MAX,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
