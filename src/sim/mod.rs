//! Deterministic simulation module
//!
//! All per-frame logic lives here:
//! - Fixed timestep only
//! - Jitter drawn from an injected, seedable RNG
//! - Stable iteration order (balls by sequence index, blocks row-major)
//! - Drawing only through the `Canvas` trait, no platform dependencies

pub mod collision;
pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    circle_overlaps_rect, reflect_off_horizontal_wall, reflect_off_vertical_wall, resolve_walls,
};
pub use grid::build_grid;
pub use rect::Rect;
pub use state::{Ball, Block, SimState, Tone};
pub use tick::{integrate, interact_blocks, sample_jitter, tick};
