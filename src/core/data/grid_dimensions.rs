use crate::core::engine::errors::GridError;

pub const DEFAULT_GRID_WIDTH: i64 = 320;
pub const DEFAULT_GRID_HEIGHT: i64 = 320;

/// Requested grid size, as supplied by the caller.
///
/// Signed so that invalid requests can be represented and rejected when the
/// engine first computes, rather than being clamped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDimensions {
    pub width: i64,
    pub height: i64,
}

/// A grid size that has passed validation. Families only ever see this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridDimensions {
    #[must_use]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<GridSize, GridError> {
        let invalid = GridError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };

        if self.width <= 0 || self.height <= 0 {
            return Err(invalid);
        }

        let width = usize::try_from(self.width).map_err(|_| invalid.clone())?;
        let height = usize::try_from(self.height).map_err(|_| invalid.clone())?;

        if width.checked_mul(height).is_none() {
            return Err(invalid);
        }

        Ok(GridSize { width, height })
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl GridSize {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        assert_eq!(GridDimensions::default(), GridDimensions::new(320, 320));
    }

    #[test]
    fn test_validate_positive_dimensions() {
        let size = GridDimensions::new(7, 3).validate().unwrap();

        assert_eq!(size.width(), 7);
        assert_eq!(size.height(), 3);
        assert_eq!(size.pixel_count(), 21);
    }

    #[test]
    fn test_validate_single_pixel() {
        let size = GridDimensions::new(1, 1).validate().unwrap();

        assert_eq!(size.pixel_count(), 1);
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        assert_eq!(
            GridDimensions::new(0, 10).validate(),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            GridDimensions::new(10, -1).validate(),
            Err(GridError::InvalidDimensions {
                width: 10,
                height: -1
            })
        );
        assert_eq!(
            GridDimensions::new(-4, -4).validate(),
            Err(GridError::InvalidDimensions {
                width: -4,
                height: -4
            })
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_pixel_count() {
        let result = GridDimensions::new(i64::MAX, i64::MAX).validate();

        assert!(matches!(result, Err(GridError::InvalidDimensions { .. })));
    }
}
