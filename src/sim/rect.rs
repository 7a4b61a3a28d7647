//! Axis-aligned rectangle geometry for grid cells

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle with its top-left corner at `min`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Point of the rectangle nearest to `p` (clamped per axis)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_inside_is_identity() {
        let rect = Rect::new(10.0, 10.0, 30.0, 20.0);
        let p = Vec2::new(20.0, 15.0);
        assert_eq!(rect.closest_point(p), p);
    }

    #[test]
    fn test_closest_point_clamps_each_axis() {
        let rect = Rect::new(10.0, 10.0, 30.0, 20.0);
        assert_eq!(rect.closest_point(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 10.0));
        assert_eq!(rect.closest_point(Vec2::new(25.0, 100.0)), Vec2::new(25.0, 30.0));
        assert_eq!(rect.closest_point(Vec2::new(50.0, 20.0)), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn test_max() {
        let rect = Rect::new(30.0, 40.0, 30.0, 20.0);
        assert_eq!(rect.max(), Vec2::new(60.0, 60.0));
    }
}
