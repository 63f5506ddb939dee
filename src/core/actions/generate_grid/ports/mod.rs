pub mod fractal_family;
