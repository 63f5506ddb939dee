use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { width: i64, height: i64 },
    UnimplementedFamily { family: &'static str },
    ZeroMaxIterations { family: &'static str },
    IterationsExceedCap {
        family: &'static str,
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "grid width and height must be positive: {}x{}",
                    width, height
                )
            }
            Self::UnimplementedFamily { family } => {
                write!(f, "fractal family '{}' does not provide a recurrence", family)
            }
            Self::ZeroMaxIterations { family } => {
                write!(
                    f,
                    "fractal family '{}' reports zero maximum iterations",
                    family
                )
            }
            Self::IterationsExceedCap {
                family,
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "fractal family '{}' reported {} iterations, above its cap of {}",
                    family, iterations, max_iterations
                )
            }
        }
    }
}

impl Error for GridError {}
