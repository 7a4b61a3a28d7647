//! CPU framebuffer canvas
//!
//! Pixels are stored as 0x00RRGGBB, the layout softbuffer presents directly.

use super::{Canvas, Rgba};
use crate::sim::Rect;

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    color: Rgba,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
            color: Rgba::BLACK,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or None outside the buffer
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Copy into a `dst_w` x `dst_h` surface with nearest-neighbour scaling
    pub fn blit_scaled(&self, dst: &mut [u32], dst_w: u32, dst_h: u32) {
        if dst_w == 0 || dst_h == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let (sw, sh) = (self.width as usize, self.height as usize);
        let (dw, dh) = (dst_w as usize, dst_h as usize);

        for (py, row) in dst.chunks_exact_mut(dw).take(dh).enumerate() {
            let sy = py * sh / dh;
            let src_row = &self.pixels[sy * sw..(sy + 1) * sw];
            for (px, out) in row.iter_mut().enumerate() {
                *out = src_row[px * sw / dw];
            }
        }
    }
}

impl Canvas for Framebuffer {
    fn set_draw_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.pixels.fill(self.color.to_xrgb());
    }

    fn fill_rect(&mut self, rect: &Rect) {
        let max = rect.max();
        let x0 = rect.min.x.floor().clamp(0.0, self.width as f32) as usize;
        let y0 = rect.min.y.floor().clamp(0.0, self.height as f32) as usize;
        let x1 = max.x.ceil().clamp(0.0, self.width as f32) as usize;
        let y1 = max.y.ceil().clamp(0.0, self.height as f32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let value = self.color.to_xrgb();
        let stride = self.width as usize;
        for y in y0..y1 {
            self.pixels[y * stride + x0..y * stride + x1].fill(value);
        }
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = self.color.to_xrgb();
    }
}
