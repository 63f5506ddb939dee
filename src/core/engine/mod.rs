pub mod errors;
pub mod fractal_grid_engine;
pub mod options;
