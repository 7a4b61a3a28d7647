//! Rendering module
//!
//! The simulation draws through the `Canvas` trait, which mirrors the handful
//! of immediate-mode calls the demo needs. `Framebuffer` is the CPU backing
//! store presented by the platform layer.

pub mod framebuffer;
pub mod shapes;

pub use framebuffer::Framebuffer;
pub use shapes::fill_circle;

use crate::sim::Rect;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0x00RRGGBB (alpha dropped)
    #[inline]
    pub fn to_xrgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Immediate-mode drawing target.
///
/// Calls use the colour set by the most recent `set_draw_color`. Drawing is
/// infallible; out-of-bounds geometry is clipped.
pub trait Canvas {
    fn set_draw_color(&mut self, color: Rgba);

    /// Fill the whole target with the current colour
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: &Rect);

    fn draw_point(&mut self, x: i32, y: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_xrgb() {
        assert_eq!(Rgba::WHITE.to_xrgb(), 0x00FF_FFFF);
        assert_eq!(Rgba::BLACK.to_xrgb(), 0);
        assert_eq!(Rgba::new(0x12, 0x34, 0x56, 0).to_xrgb(), 0x0012_3456);
    }
}
