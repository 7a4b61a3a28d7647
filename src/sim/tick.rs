//! Fixed timestep frame tick
//!
//! One call per rendered frame: walls, block sweep (with drawing), position
//! integration, then ball drawing.

use rand::Rng;

use super::collision::{circle_overlaps_rect, resolve_walls};
use super::state::{Ball, Block, SimState};
use crate::consts::JITTER_DEGREES;
use crate::{degrees_to_radians, normalize_angle};
use crate::renderer::{Canvas, Rgba, fill_circle};

/// Random deflection added to a block bounce, whole degrees in
/// `-JITTER_DEGREES..=JITTER_DEGREES` converted to radians
pub fn sample_jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let degrees = rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES);
    degrees_to_radians(degrees as f32)
}

/// Sweep every block for one ball, flipping and drawing as it goes.
///
/// A block flips only when the ball's tone matches the block's current tone
/// and the ball overlaps it; the ball then bounces with `angle := -angle +
/// jitter`, wrapped to [-π, π). Each block is drawn right after its test.
/// Returns the number of flips.
pub fn interact_blocks<R, C>(
    ball: &mut Ball,
    blocks: &mut [Block],
    rng: &mut R,
    canvas: &mut C,
) -> u32
where
    R: Rng + ?Sized,
    C: Canvas + ?Sized,
{
    let mut flips = 0;
    for block in blocks.iter_mut() {
        if ball.tone == block.tone && circle_overlaps_rect(ball.pos, ball.radius, &block.rect) {
            block.flip();
            let jitter = sample_jitter(rng);
            ball.angle = normalize_angle(-ball.angle + jitter);
            flips += 1;
            log::trace!(
                "Ball {} flipped block {} to {:?} (jitter {:.3})",
                ball.id,
                block.id,
                block.tone,
                jitter
            );
        }

        canvas.set_draw_color(block.tone.rgba());
        canvas.fill_rect(&block.rect);
    }
    flips
}

/// Advance a ball along its heading by one timestep
pub fn integrate(ball: &mut Ball, dt: f32) {
    ball.pos += ball.velocity() * dt;
}

/// Advance the simulation by one frame and draw it.
///
/// Balls are processed in sequence order, so a later ball's sweep sees the
/// flips made by earlier balls this frame. The phases run for all balls
/// before the next phase starts so the ball circles are drawn over every
/// block; each ball's own state evolves exactly as if its phases ran
/// back to back. Only the draw-call sequence differs from per-ball
/// interleaving: all block sweeps are issued first, then every circle.
pub fn tick<R, C>(state: &mut SimState, rng: &mut R, canvas: &mut C, dt: f32)
where
    R: Rng + ?Sized,
    C: Canvas + ?Sized,
{
    let (width, height) = (state.width, state.height);

    canvas.set_draw_color(Rgba::WHITE);
    canvas.clear();

    for ball in state.balls.iter_mut() {
        resolve_walls(ball, width, height);
    }

    for ball in state.balls.iter_mut() {
        interact_blocks(ball, &mut state.blocks, rng, canvas);
    }

    for ball in state.balls.iter_mut() {
        integrate(ball, dt);
    }

    for ball in &state.balls {
        fill_circle(canvas, ball.pos.x, ball.pos.y, ball.radius, ball.tone.rgba());
    }

    state.frame += 1;
}
