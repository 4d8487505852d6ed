//! Cell geometry in normalized device coordinates.

use bytemuck::{Pod, Zeroable};

/// Grid dimensions as seen by the renderer.
///
/// Primitives are laid out in the same x-major order as the simulation:
/// `index(x, y) = x * height + y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridExtent {
    pub width: u32,
    pub height: u32,
}

impl GridExtent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn index(self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Yields `(x, y)` in index order.
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CellVertex {
    pub pos: [f32; 3],
}

impl CellVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Two triangles sharing the top-right/bottom-left diagonal.
pub const CELL_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// Geometry of one cell: corners ordered top-right, bottom-right,
/// bottom-left, top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellQuad {
    pub vertices: [CellVertex; 4],
    pub indices: [u16; 6],
}

impl CellQuad {
    /// Bottom-left corner.
    #[inline]
    pub fn min(&self) -> [f32; 2] {
        let [x, y, _] = self.vertices[2].pos;
        [x, y]
    }

    /// Top-right corner.
    #[inline]
    pub fn max(&self) -> [f32; 2] {
        let [x, y, _] = self.vertices[0].pos;
        [x, y]
    }

    pub fn area(&self) -> f32 {
        let ([x0, y0], [x1, y1]) = (self.min(), self.max());
        (x1 - x0) * (y1 - y0)
    }
}

/// Builds the quad for cell `(x, y)`.
///
/// The cell spans `[x_start, x_start + 2/W) x [y_start, y_start + 2/H)` with
/// `x_start = x / (W/2) - 1` and `y_start = y / (H/2) - 1`, so the whole grid
/// tiles clip space `[-1, 1]^2`. Offsets are per axis so non-square grids
/// tile exactly too.
pub fn build_quad(x: u32, y: u32, extent: GridExtent) -> CellQuad {
    let (w, h) = (extent.width as f32, extent.height as f32);
    let z = 0.0;

    let x_start = x as f32 / (w / 2.0) - 1.0;
    let y_start = y as f32 / (h / 2.0) - 1.0;
    let x_end = x_start + 2.0 / w;
    let y_end = y_start + 2.0 / h;

    CellQuad {
        vertices: [
            CellVertex { pos: [x_end, y_end, z] },
            CellVertex { pos: [x_end, y_start, z] },
            CellVertex { pos: [x_start, y_start, z] },
            CellVertex { pos: [x_start, y_end, z] },
        ],
        indices: CELL_INDICES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── single quad ───────────────────────────────────────────────────────

    #[test]
    fn first_cell_starts_at_clip_corner() {
        let q = build_quad(0, 0, GridExtent::new(100, 100));
        assert_eq!(q.min(), [-1.0, -1.0]);
        assert!(close(q.max()[0], -0.98));
        assert!(close(q.max()[1], -0.98));
        assert_eq!(q.indices, [0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn last_cell_ends_at_clip_corner() {
        let q = build_quad(99, 99, GridExtent::new(100, 100));
        assert!(close(q.max()[0], 1.0));
        assert!(close(q.max()[1], 1.0));
    }

    #[test]
    fn non_square_offsets_are_per_axis() {
        let e = GridExtent::new(4, 8);
        let q = build_quad(3, 7, e);
        assert!(close(q.max()[0] - q.min()[0], 0.5));
        assert!(close(q.max()[1] - q.min()[1], 0.25));
        assert!(close(q.max()[0], 1.0));
        assert!(close(q.max()[1], 1.0));
    }

    // ── tiling ────────────────────────────────────────────────────────────

    fn assert_tiles(e: GridExtent) {
        let total: f64 = e.cells().map(|(x, y)| build_quad(x, y, e).area() as f64).sum();
        assert!((total - 4.0).abs() < 1e-3, "area {total} for {e:?}");

        // Adjacent quads share edges exactly: no gap, no overlap.
        for (x, y) in e.cells() {
            let q = build_quad(x, y, e);
            if x + 1 < e.width {
                assert!(close(q.max()[0], build_quad(x + 1, y, e).min()[0]));
            } else {
                assert!(close(q.max()[0], 1.0));
            }
            if y + 1 < e.height {
                assert!(close(q.max()[1], build_quad(x, y + 1, e).min()[1]));
            } else {
                assert!(close(q.max()[1], 1.0));
            }
        }
    }

    #[test]
    fn square_grid_tiles_clip_space() {
        assert_tiles(GridExtent::new(100, 100));
    }

    #[test]
    fn non_square_grid_tiles_clip_space() {
        assert_tiles(GridExtent::new(30, 12));
    }

    // ── index order ───────────────────────────────────────────────────────

    #[test]
    fn cells_iterate_in_index_order() {
        let e = GridExtent::new(3, 5);
        for (i, (x, y)) in e.cells().enumerate() {
            assert_eq!(e.index(x, y), i);
        }
        assert_eq!(e.cells().count(), e.cell_count());
    }
}
