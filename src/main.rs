use log::info;

use escape_grid::{FractalGridEngine, FractalKinds, GridDimensions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    for kind in FractalKinds::ALL {
        let mut engine = FractalGridEngine::new(kind.default_family(), GridDimensions::default());
        let grid = engine.compute()?;
        let summary = grid.summary();

        info!(
            "{}: {}x{} grid, ratio min {:.3} max {:.3} mean {:.3}, {:.1}% capped",
            kind.display_name(),
            grid.width(),
            grid.height(),
            summary.min,
            summary.max,
            summary.mean,
            summary.capped_fraction * 100.0
        );
    }

    Ok(())
}
