pub mod generate_grid;
pub mod generate_grid_rayon;
pub mod ports;
