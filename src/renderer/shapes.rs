//! Shape rasterization for 2D primitives

use super::{Canvas, Rgba};

/// Draw a filled circle point by point.
///
/// Centre and radius are truncated to whole pixels. Every offset inside the
/// `2r` x `2r` box whose squared distance is within `r²` is plotted.
pub fn fill_circle<C: Canvas + ?Sized>(canvas: &mut C, x: f32, y: f32, radius: f32, color: Rgba) {
    let (cx, cy, r) = (x as i32, y as i32, radius as i32);
    canvas.set_draw_color(color);

    for w in 0..r * 2 {
        for h in 0..r * 2 {
            let dx = r - w;
            let dy = r - h;
            if dx * dx + dy * dy <= r * r {
                canvas.draw_point(cx + dx, cy + dy);
            }
        }
    }
}
