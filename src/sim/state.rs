//! Simulation state and core entity types
//!
//! Everything a frame reads or mutates lives in `SimState`. The jitter RNG is
//! held by the caller and passed into `tick` so tests can pin it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::build_grid;
use super::rect::Rect;
use crate::renderer::Rgba;
use crate::settings::{BallSpawn, Settings};

/// Two-valued colour shared by blocks and balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    White,
    Black,
}

impl Tone {
    /// The other tone
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Tone::White => Tone::Black,
            Tone::Black => Tone::White,
        }
    }

    /// Opaque render colour for this tone
    pub fn rgba(self) -> Rgba {
        match self {
            Tone::White => Rgba::WHITE,
            Tone::Black => Rgba::BLACK,
        }
    }
}

/// A grid cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub rect: Rect,
    pub tone: Tone,
}

impl Block {
    pub fn flip(&mut self) {
        self.tone = self.tone.flipped();
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub tone: Tone,
    /// Centre position
    pub pos: Vec2,
    pub radius: f32,
    /// Scalar speed, units per second
    pub speed: f32,
    /// Heading in radians; not normalized
    pub angle: f32,
}

impl Ball {
    pub fn from_spawn(id: u32, spawn: &BallSpawn) -> Self {
        Self {
            id,
            tone: spawn.tone,
            pos: Vec2::new(spawn.x, spawn.y),
            radius: spawn.radius,
            speed: spawn.speed,
            angle: spawn.angle,
        }
    }

    /// Velocity derived from speed and heading
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed * self.angle.cos(), self.speed * self.angle.sin())
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Playfield size used for wall bounds; fixed at startup
    pub width: f32,
    pub height: f32,
    /// Block grid in row-major order
    pub blocks: Vec<Block>,
    /// Balls, simulated in sequence order
    pub balls: Vec<Ball>,
    /// Frames stepped so far
    pub frame: u64,
}

impl SimState {
    /// Build the grid and spawn the balls described by `settings`
    pub fn new(settings: &Settings) -> Self {
        let blocks = build_grid(
            settings.width as f32,
            settings.height as f32,
            settings.block_width,
            settings.block_height,
        );
        let balls = settings
            .balls
            .iter()
            .enumerate()
            .map(|(i, spawn)| Ball::from_spawn(i as u32, spawn))
            .collect();

        Self {
            width: settings.width as f32,
            height: settings.height as f32,
            blocks,
            balls,
            frame: 0,
        }
    }

    /// Number of blocks currently showing `tone`
    pub fn count_tone(&self, tone: Tone) -> usize {
        self.blocks.iter().filter(|b| b.tone == tone).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_flip() {
        assert_eq!(Tone::White.flipped(), Tone::Black);
        assert_eq!(Tone::Black.flipped().flipped(), Tone::Black);
        assert_eq!(Tone::White.rgba(), Rgba::new(255, 255, 255, 255));
        assert_eq!(Tone::Black.rgba(), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn test_ball_velocity() {
        let ball = Ball {
            id: 0,
            tone: Tone::White,
            pos: Vec2::ZERO,
            radius: 15.0,
            speed: 80.0,
            angle: std::f32::consts::FRAC_PI_2,
        };
        let vel = ball.velocity();
        assert!(vel.x.abs() < 1e-4);
        assert!((vel.y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_new_state_from_defaults() {
        let state = SimState::new(&Settings::default());
        assert_eq!(state.blocks.len(), 780);
        assert_eq!(state.count_tone(Tone::White), 390);
        assert_eq!(state.count_tone(Tone::Black), 390);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.balls[0].id, 0);
        assert_eq!(state.balls[0].pos, Vec2::new(390.0, 500.0));
        assert_eq!(state.balls[1].pos, Vec2::new(110.0, 500.0));
        assert_eq!(state.frame, 0);
    }
}
