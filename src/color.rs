//! Display colors

/// 8-bit RGBA color
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}
