use std::error::Error;
use std::fmt;

pub const DEFAULT_BOUND: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with xmax > xmin and ymax > ymin: x [{}, {}], y [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangular region of the complex plane mapped onto the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewportError> {
        let finite = [xmin, xmax, ymin, ymax].iter().all(|bound| bound.is_finite());

        if !finite || xmax <= xmin || ymax <= ymin {
            return Err(ViewportError::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xmin: -DEFAULT_BOUND,
            xmax: DEFAULT_BOUND,
            ymin: -DEFAULT_BOUND,
            ymax: DEFAULT_BOUND,
        }
    }
}
