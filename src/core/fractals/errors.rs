use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum FamilyError {
    ZeroMaxIterationsError,
    InvalidThreshold { threshold: f64 },
}

impl fmt::Display for FamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidThreshold { threshold } => {
                write!(
                    f,
                    "Divergence threshold must be finite and positive, got {}",
                    threshold
                )
            }
        }
    }
}

impl Error for FamilyError {}
