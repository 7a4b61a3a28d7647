//! Startup settings
//!
//! Fixed for the lifetime of a run. The binary uses the defaults; JSON
//! parsing exists for tests and embedding.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Tone;

/// Initial placement of one ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub tone: Tone,
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Heading in radians (0 = +x, positive turns toward +y)
    pub angle: f32,
}

fn default_radius() -> f32 {
    BALL_RADIUS
}

fn default_speed() -> f32 {
    BALL_SPEED
}

impl BallSpawn {
    pub fn new(tone: Tone, (x, y): (f32, f32), angle: f32) -> Self {
        Self {
            tone,
            x,
            y,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            angle,
        }
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Playfield width, also the initial window width
    pub width: u32,
    /// Playfield height, also the initial window height
    pub height: u32,
    /// Whether the user may resize the window (the playfield stays fixed)
    pub resizable: bool,

    // === Block grid ===
    pub block_width: f32,
    pub block_height: f32,

    // === Balls, simulated in list order ===
    pub balls: Vec<BallSpawn>,

    /// RNG seed for jitter; drawn at startup when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            resizable: true,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,

            balls: vec![
                BallSpawn::new(Tone::White, WHITE_BALL_START, WHITE_BALL_ANGLE),
                BallSpawn::new(Tone::Black, BLACK_BALL_START, BLACK_BALL_ANGLE),
            ],

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of grid columns
    pub fn columns(&self) -> u32 {
        (self.width as f32 / self.block_width) as u32
    }

    /// Number of grid rows
    pub fn rows(&self) -> u32 {
        (self.height as f32 / self.block_height) as u32
    }

    /// Check the settings describe a playable field
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "playfield must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.block_width > 0.0 && self.block_height > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "block size must be positive, got {}x{}",
                self.block_width, self.block_height
            )));
        }

        // The grid must tile the playfield with whole blocks
        let cols = self.columns() as f32 * self.block_width;
        let rows = self.rows() as f32 * self.block_height;
        if cols != self.width as f32 || rows != self.height as f32 {
            return Err(Error::InvalidSettings(format!(
                "{}x{} blocks do not tile a {}x{} playfield",
                self.block_width, self.block_height, self.width, self.height
            )));
        }

        for (i, spawn) in self.balls.iter().enumerate() {
            let values = [spawn.x, spawn.y, spawn.radius, spawn.speed, spawn.angle];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(Error::InvalidSettings(format!(
                    "ball {} has a non-finite spawn value",
                    i
                )));
            }
            if spawn.radius <= 0.0
                || spawn.radius * 2.0 > self.width as f32
                || spawn.radius * 2.0 > self.height as f32
            {
                return Err(Error::InvalidSettings(format!(
                    "ball {} radius {} does not fit the playfield",
                    i, spawn.radius
                )));
            }
        }

        Ok(())
    }
}
