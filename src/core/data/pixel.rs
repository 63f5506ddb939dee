#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub ix: usize,
    pub iy: usize,
}
