use super::geometry::{build_quad, GridExtent};
use super::pipeline::{PrimitiveId, ShadingPipeline};

/// Draws a grid of cells through a [`ShadingPipeline`].
///
/// All primitives are built up front, in index order, and reused every
/// frame. Per frame, each cell costs one uniform update and one draw.
pub struct CellRenderer<P: ShadingPipeline> {
    pipeline: P,
    primitives: Vec<PrimitiveId>,
}

impl<P: ShadingPipeline> CellRenderer<P> {
    pub fn new(mut pipeline: P, extent: GridExtent) -> Self {
        let primitives: Vec<PrimitiveId> = extent
            .cells()
            .map(|(x, y)| pipeline.build_primitive(&build_quad(x, y, extent)))
            .collect();

        log::debug!(
            "built {} cell primitives for a {}x{} grid",
            primitives.len(),
            extent.width,
            extent.height
        );

        Self { pipeline, primitives }
    }

    /// Records one draw per cell. `alive` yields one flag per cell in index
    /// order; extra flags are ignored and missing ones leave their cells
    /// undrawn. Returns the number of draws issued.
    pub fn draw_cells<I>(&mut self, alive: I) -> usize
    where
        I: IntoIterator<Item = bool>,
    {
        self.pipeline.begin_frame();

        let mut drawn = 0;
        for (&primitive, alive) in self.primitives.iter().zip(alive) {
            self.pipeline.set_alive(alive);
            self.pipeline.draw(primitive);
            drawn += 1;
        }

        if drawn != self.primitives.len() {
            log::warn!("drew {drawn} of {} cells; snapshot was short", self.primitives.len());
        }
        drawn
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut P {
        &mut self.pipeline
    }
}
