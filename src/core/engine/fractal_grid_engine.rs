use std::time::Instant;

use log::{debug, info};

use crate::core::actions::generate_grid::generate_grid::generate_grid;
use crate::core::actions::generate_grid::generate_grid_rayon::generate_grid_rayon;
use crate::core::actions::generate_grid::ports::fractal_family::FractalFamily;
use crate::core::data::fractal_grid::FractalGrid;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::engine::errors::GridError;
use crate::core::engine::options::{EngineOptions, Execution};

#[derive(Debug, Clone, PartialEq)]
enum GridState {
    Configured,
    Computed(FractalGrid),
    Failed(GridError),
}

/// Observable lifecycle of an engine. `Computed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Configured,
    Computed,
    Failed,
}

/// Computes one escape-time grid for a family and caches it.
///
/// The engine is single-shot: parameters are fixed at construction and the
/// first `compute`/`get_grid` call settles the outcome for good. To change
/// anything, build a new engine.
#[derive(Debug)]
pub struct FractalGridEngine<F> {
    family: F,
    dimensions: GridDimensions,
    options: EngineOptions,
    state: GridState,
}

impl<F: FractalFamily + Sync> FractalGridEngine<F> {
    pub fn new(family: F, dimensions: GridDimensions) -> Self {
        Self::with_options(family, dimensions, EngineOptions::default())
    }

    pub fn with_options(family: F, dimensions: GridDimensions, options: EngineOptions) -> Self {
        Self {
            family,
            dimensions,
            options,
            state: GridState::Configured,
        }
    }

    pub fn family(&self) -> &F {
        &self.family
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    #[must_use]
    pub fn status(&self) -> EngineStatus {
        match self.state {
            GridState::Configured => EngineStatus::Configured,
            GridState::Computed(_) => EngineStatus::Computed,
            GridState::Failed(_) => EngineStatus::Failed,
        }
    }

    /// The grid if it has already been computed. Never triggers work.
    #[must_use]
    pub fn cached_grid(&self) -> Option<&FractalGrid> {
        match &self.state {
            GridState::Computed(grid) => Some(grid),
            _ => None,
        }
    }

    /// Computes the grid on first call; later calls return the cached grid,
    /// or the stored error if the first call failed.
    pub fn compute(&mut self) -> Result<&FractalGrid, GridError> {
        match self.state {
            GridState::Computed(ref grid) => Ok(grid),
            GridState::Failed(ref error) => Err(error.clone()),
            GridState::Configured => {
                self.state = match self.evaluate() {
                    Ok(grid) => {
                        debug!("{} engine: Configured -> Computed", self.family.name());
                        GridState::Computed(grid)
                    }
                    Err(error) => {
                        debug!(
                            "{} engine: Configured -> Failed ({})",
                            self.family.name(),
                            error
                        );
                        GridState::Failed(error)
                    }
                };

                self.compute()
            }
        }
    }

    /// Lazy read of the grid; identical to [`Self::compute`].
    pub fn get_grid(&mut self) -> Result<&FractalGrid, GridError> {
        self.compute()
    }

    fn evaluate(&self) -> Result<FractalGrid, GridError> {
        let size = self.dimensions.validate()?;
        let max_iterations = self.family.max_iterations();

        if max_iterations == 0 {
            return Err(GridError::ZeroMaxIterations {
                family: self.family.name(),
            });
        }

        let start = Instant::now();
        let counts = match self.options.execution {
            Execution::Sequential => generate_grid(size, &self.family)?,
            Execution::Parallel => generate_grid_rayon(size, &self.family)?,
        };
        let duration = start.elapsed();

        if let Some(&iterations) = counts.iter().find(|&&count| count > max_iterations) {
            return Err(GridError::IterationsExceedCap {
                family: self.family.name(),
                iterations,
                max_iterations,
            });
        }

        let nit_max = f64::from(max_iterations);
        let ratios = counts
            .into_iter()
            .map(|iterations| f64::from(iterations) / nit_max)
            .collect();

        info!(
            "{} grid {}x{} ({} max iterations, {:?}) computed in {:?}",
            self.family.name(),
            size.width(),
            size.height(),
            max_iterations,
            self.options.execution,
            duration
        );

        Ok(FractalGrid::from_ratios(size, ratios))
    }
}
