//! Span presentation surface
//!
//! Fills cached spans into an RGBA pixel buffer. Row 0 is the top row;
//! hosts that want a y-up view flip on their side.

use crate::cache::Span;
use crate::color::Rgba8;
use crate::store::PolygonStore;

use std::cmp::max;
use std::cmp::min;
use std::path::Path;

/// RGBA8 pixel buffer, row-major
#[derive(Debug,Default)]
pub struct Surface {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![0u8; width * height * 4], width, height }
    }
    pub fn clear(&mut self, c: Rgba8) {
        for px in self.data.chunks_mut(4) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
            px[3] = c.a;
        }
    }
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < self.width && y < self.height);
        let i = (y * self.width + x) * 4;
        Rgba8::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }
    pub fn set(&mut self, x: usize, y: usize, c: Rgba8) {
        assert!(x < self.width && y < self.height);
        let i = (y * self.width + x) * 4;
        self.data[i] = c.r;
        self.data[i + 1] = c.g;
        self.data[i + 2] = c.b;
        self.data[i + 3] = c.a;
    }
    /// Fill x1..x2 on row y, clipped to the buffer
    pub fn fill_span(&mut self, y: i64, x1: i64, x2: i64, c: Rgba8) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let x1 = max(x1, 0);
        let x2 = min(x2, self.width as i64);
        for x in x1..x2 {
            self.set(x as usize, y as usize, c);
        }
    }
    pub fn fill_spans(&mut self, spans: &[Span], c: Rgba8) {
        for s in spans {
            self.fill_span(s.y, s.x1, s.x2, c);
        }
    }
    /// Fill every cached polygon in the store, in insertion order
    ///
    /// Polygons without a built cache are skipped.
    pub fn draw_store(&mut self, store: &PolygonStore) {
        for (_, p) in store.iter() {
            if let Ok(spans) = p.spans() {
                self.fill_spans(spans, p.fill_color);
            }
        }
    }
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), image::ImageError> {
        image::save_buffer(filename, &self.data,
                           self.width as u32, self.height as u32,
                           image::ColorType::Rgba8)
    }
}
