//! Block grid construction

use super::rect::Rect;
use super::state::{Block, Tone};

/// Tile a `width` x `height` playfield with `block_w` x `block_h` cells.
///
/// Blocks are laid out row-major. Rows in the upper half start white, the
/// rest black. Any remainder that does not fit a whole block is left uncovered;
/// `Settings::validate` rejects such layouts before they get here.
pub fn build_grid(width: f32, height: f32, block_w: f32, block_h: f32) -> Vec<Block> {
    let cols = (width / block_w) as u32;
    let rows = (height / block_h) as u32;
    let white_rows = rows / 2;

    let mut blocks = Vec::with_capacity((cols * rows) as usize);
    for i in 0..cols * rows {
        let col = i % cols;
        let row = i / cols;
        let tone = if row < white_rows { Tone::White } else { Tone::Black };
        blocks.push(Block {
            id: i,
            rect: Rect::new(col as f32 * block_w, row as f32 * block_h, block_w, block_h),
            tone,
        });
    }

    log::debug!("Built {}x{} block grid ({} blocks)", cols, rows, blocks.len());
    blocks
}
