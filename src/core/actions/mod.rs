pub mod escape_time;
pub mod generate_grid;
