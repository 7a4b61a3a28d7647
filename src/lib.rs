//! Day & Night - two balls painting a two-tone block grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, block flips, integration)
//! - `renderer`: Canvas abstraction and CPU framebuffer
//! - `app`: Lifecycle hooks driven by the platform loop
//! - `platform`: winit window + softbuffer presentation
//! - `settings`: Startup configuration

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{AppEvent, AppResult, Demo};
pub use error::{Error, Result};
pub use settings::{BallSpawn, Settings};

/// Demo configuration constants
pub mod consts {
    /// Fixed simulation timestep, one display refresh at 60 Hz
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (also the initial window size)
    pub const SCREEN_WIDTH: u32 = 780;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Block cell size
    pub const BLOCK_WIDTH: f32 = 30.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED: f32 = 80.0;

    /// Spawn points (x, y) and headings in radians
    pub const WHITE_BALL_START: (f32, f32) = (390.0, 500.0);
    pub const WHITE_BALL_ANGLE: f32 = 17.4;
    pub const BLACK_BALL_START: (f32, f32) = (110.0, 500.0);
    pub const BLACK_BALL_ANGLE: f32 = -5.8;

    /// Block-hit deflection jitter, whole degrees either side of the reflection
    pub const JITTER_DEGREES: i32 = 10;

    pub const WINDOW_TITLE: &str = "Day & Night";
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
        assert!((normalize_angle(17.4) - (17.4 - 3.0 * 2.0 * PI)).abs() < 1e-4);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-6);
        assert!((degrees_to_radians(-10.0) + 0.174_532_9).abs() < 1e-6);
    }
}
