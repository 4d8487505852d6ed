use thiserror::Error;

use crate::paint::Color;

use super::geometry::CellQuad;

/// Handle to a primitive owned by a [`ShadingPipeline`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PrimitiveId(pub(crate) u32);

impl PrimitiveId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shading back-end for cell quads.
///
/// One program is shared by every cell; the only per-draw input is the
/// integer `alive` uniform. The vertex stage passes positions through and
/// the fragment stage outputs [`fragment_color`].
pub trait ShadingPipeline {
    /// Uploads the geometry of one cell. Called once per cell at start-up; the
    /// primitive lives as long as the pipeline.
    fn build_primitive(&mut self, quad: &CellQuad) -> PrimitiveId;

    /// Starts a new frame. Draws recorded for the previous frame are discarded.
    fn begin_frame(&mut self);

    /// Sets the `alive` uniform used by subsequent draws.
    fn set_alive(&mut self, alive: bool);

    /// Issues one indexed draw of the primitive's two triangles.
    fn draw(&mut self, primitive: PrimitiveId);
}

/// Output of the fragment stage: opaque white for live cells, opaque black
/// otherwise.
#[inline]
pub fn fragment_color(alive: bool) -> Color {
    if alive { Color::WHITE } else { Color::BLACK }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    /// Compiler diagnostics, one message per line.
    #[error("cell shader failed to compile:\n{0}")]
    Compile(String),
    /// Validation error captured while building the module or pipeline.
    #[error("cell pipeline failed validation: {0}")]
    Validation(String),
}
