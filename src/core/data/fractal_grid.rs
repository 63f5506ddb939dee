use std::ops::Index;

use crate::core::data::grid_dimensions::GridSize;

/// Normalized escape ratios, one per pixel, indexed `[ix][iy]`.
///
/// Stored column-major by `ix`: the ratio for `(ix, iy)` lives at
/// `ix * height + iy`.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalGrid {
    width: usize,
    height: usize,
    ratios: Vec<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Share of pixels that never escaped within the iteration cap.
    pub capped_fraction: f64,
}

impl FractalGrid {
    pub(crate) fn from_ratios(size: GridSize, ratios: Vec<f64>) -> Self {
        debug_assert_eq!(ratios.len(), size.pixel_count());

        Self {
            width: size.width(),
            height: size.height(),
            ratios,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn get(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.width || iy >= self.height {
            return None;
        }

        Some(self.ratios[ix * self.height + iy])
    }

    /// All ratios for a fixed `ix`, ordered by `iy`.
    #[must_use]
    pub fn column(&self, ix: usize) -> Option<&[f64]> {
        if ix >= self.width {
            return None;
        }

        let start = ix * self.height;
        Some(&self.ratios[start..start + self.height])
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.ratios.iter().copied()
    }

    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.ratios
            .chunks(self.height)
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// Brightness-style shading, `1 - sqrt(ratio)`, with the same layout.
    #[must_use]
    pub fn shaded(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            ratios: self.ratios.iter().map(|ratio| 1.0 - ratio.sqrt()).collect(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> GridSummary {
        let (min, max, sum, capped) = self.ratios.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0, 0usize),
            |(min, max, sum, capped), &ratio| {
                (
                    min.min(ratio),
                    max.max(ratio),
                    sum + ratio,
                    capped + usize::from(ratio >= 1.0),
                )
            },
        );
        let count = self.ratios.len() as f64;

        GridSummary {
            min,
            max,
            mean: sum / count,
            capped_fraction: capped as f64 / count,
        }
    }
}

impl Index<(usize, usize)> for FractalGrid {
    type Output = f64;

    fn index(&self, (ix, iy): (usize, usize)) -> &f64 {
        assert!(
            ix < self.width && iy < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            ix,
            iy,
            self.width,
            self.height
        );

        &self.ratios[ix * self.height + iy]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_dimensions::GridDimensions;

    fn grid_2x3() -> FractalGrid {
        let size = GridDimensions::new(2, 3).validate().unwrap();

        FractalGrid::from_ratios(size, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0])
    }

    #[test]
    fn test_indexing_is_column_major_by_ix() {
        let grid = grid_2x3();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[(0, 0)], 0.0);
        assert_eq!(grid[(0, 2)], 0.5);
        assert_eq!(grid[(1, 0)], 0.75);
        assert_eq!(grid.get(1, 1), Some(1.0));
    }

    #[test]
    fn test_get_outside_grid_is_none() {
        let grid = grid_2x3();

        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.column(2), None);
    }

    #[test]
    #[should_panic]
    fn test_index_outside_grid_panics() {
        let grid = grid_2x3();

        let _ = grid[(0, 3)];
    }

    #[test]
    fn test_column_and_nested_layout() {
        let grid = grid_2x3();

        assert_eq!(grid.column(1), Some(&[0.75, 1.0, 1.0][..]));
        assert_eq!(
            grid.to_nested(),
            vec![vec![0.0, 0.25, 0.5], vec![0.75, 1.0, 1.0]]
        );
    }

    #[test]
    fn test_shaded() {
        let shaded = grid_2x3().shaded();

        assert_eq!(shaded[(0, 0)], 1.0);
        assert_eq!(shaded[(0, 1)], 0.5);
        assert_eq!(shaded[(1, 2)], 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = grid_2x3().summary();

        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.mean, 3.5 / 6.0);
        assert_eq!(summary.capped_fraction, 2.0 / 6.0);
    }
}
