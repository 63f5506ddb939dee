pub mod complex;
pub mod fractal_grid;
pub mod grid_dimensions;
pub mod pixel;
pub mod viewport;
