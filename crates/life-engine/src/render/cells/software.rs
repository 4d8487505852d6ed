use crate::paint::Color;

use super::geometry::CellQuad;
use super::pipeline::{fragment_color, PrimitiveId, ShadingPipeline};

/// CPU rasterizer with the same shading rules as the wgpu pipeline.
///
/// Renders into an RGBA8 framebuffer with row 0 at the top (NDC `y = +1`).
/// Triangles are filled by testing pixel centers against edge functions;
/// pixels on a shared edge are written by both neighbors, last draw wins.
pub struct SoftwareRasterizer {
    width: u32,
    height: u32,
    clear: [u8; 4],
    pixels: Vec<[u8; 4]>,
    primitives: Vec<CellQuad>,
    alive: bool,
    draw_calls: usize,
}

impl SoftwareRasterizer {
    pub fn new(width: u32, height: u32, clear: Color) -> Self {
        let clear = clear.to_rgba8();
        Self {
            width,
            height,
            clear,
            pixels: vec![clear; width as usize * height as usize],
            primitives: Vec::new(),
            alive: false,
            draw_calls: 0,
        }
    }

    /// Pixel at column `x`, row `y` (top-left origin).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major framebuffer, top row first.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Draws issued since the last `begin_frame`.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    fn to_screen(&self, pos: [f32; 3]) -> [f32; 2] {
        [
            (pos[0] + 1.0) * 0.5 * self.width as f32,
            (1.0 - pos[1]) * 0.5 * self.height as f32,
        ]
    }

    fn fill_triangle(&mut self, tri: [[f32; 2]; 3], rgba: [u8; 4]) {
        let edge = |a: [f32; 2], b: [f32; 2], p: [f32; 2]| {
            (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
        };

        let area = edge(tri[0], tri[1], tri[2]);
        if area == 0.0 {
            return;
        }

        let min_x = tri.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let min_y = tri.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_x = (tri.iter().map(|p| p[0]).fold(f32::NEG_INFINITY, f32::max).ceil() as u32).min(self.width);
        let max_y = (tri.iter().map(|p| p[1]).fold(f32::NEG_INFINITY, f32::max).ceil() as u32).min(self.height);

        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = [px as f32 + 0.5, py as f32 + 0.5];
                let w0 = edge(tri[1], tri[2], p) * area.signum();
                let w1 = edge(tri[2], tri[0], p) * area.signum();
                let w2 = edge(tri[0], tri[1], p) * area.signum();
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.pixels[py as usize * self.width as usize + px as usize] = rgba;
                }
            }
        }
    }
}

impl ShadingPipeline for SoftwareRasterizer {
    fn build_primitive(&mut self, quad: &CellQuad) -> PrimitiveId {
        self.primitives.push(*quad);
        PrimitiveId(self.primitives.len() as u32 - 1)
    }

    fn begin_frame(&mut self) {
        self.pixels.fill(self.clear);
        self.draw_calls = 0;
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    fn draw(&mut self, primitive: PrimitiveId) {
        let Some(quad) = self.primitives.get(primitive.index()).copied() else {
            log::warn!("draw of unknown primitive {primitive:?}");
            return;
        };

        let rgba = fragment_color(self.alive).to_rgba8();
        for tri in quad.indices.chunks_exact(3) {
            let corners = [
                self.to_screen(quad.vertices[tri[0] as usize].pos),
                self.to_screen(quad.vertices[tri[1] as usize].pos),
                self.to_screen(quad.vertices[tri[2] as usize].pos),
            ];
            self.fill_triangle(corners, rgba);
        }
        self.draw_calls += 1;
    }
}
