use crate::core::fractals::errors::FamilyError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Escape radius of `z -> z² + c0`: once `|z| > 2` the orbit diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    max_iterations: u32,
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32) -> Result<Self, FamilyError> {
        if max_iterations == 0 {
            return Err(FamilyError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_iterations() {
        assert_eq!(MandelbrotParams::default().max_iterations(), 50);
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            MandelbrotParams::new(0),
            Err(FamilyError::ZeroMaxIterationsError)
        );
        assert_eq!(MandelbrotParams::new(1).unwrap().max_iterations(), 1);
    }
}
