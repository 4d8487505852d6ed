//! Per-frame simulation + render step, independent of the GPU back-end.

use life_engine::core::{AppControl, FrameOutcome};
use life_engine::render::cells::{CellRenderer, GridExtent, ShadingPipeline};
use life_sim::{Grid, GridSize};

/// Frame loop lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    /// Window exists; GPU resources not built yet.
    Init,
    /// One generation simulated and drawn per frame.
    Running,
    /// Resources released; no further frames.
    Terminated,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// Pipeline and primitives are ready.
    Initialized,
    /// An exit key was held or the window is closing.
    ExitRequested,
}

impl LoopState {
    pub fn on(self, event: LoopEvent) -> LoopState {
        match (self, event) {
            (LoopState::Init, LoopEvent::Initialized) => LoopState::Running,
            (_, LoopEvent::ExitRequested) => LoopState::Terminated,
            (state, _) => state,
        }
    }
}

pub fn extent_of(size: GridSize) -> GridExtent {
    GridExtent::new(size.width() as u32, size.height() as u32)
}

/// Records one draw per cell of the current generation. Returns the number
/// of draws.
pub fn draw_generation<P: ShadingPipeline>(grid: &Grid, renderer: &mut CellRenderer<P>) -> usize {
    renderer.draw_cells(grid.current().cells().iter().map(|c| c.is_alive()))
}

/// Advances `grid` once the frame showing its current generation reached the
/// screen. A skipped frame leaves the grid alone so the same generation is
/// drawn again next time.
pub fn finish_frame(grid: &mut Grid, outcome: FrameOutcome) -> AppControl {
    if outcome == FrameOutcome::Presented {
        let shown = grid.step();
        log::trace!("presented generation with {} live cells", shown.population());
    }
    outcome.control()
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::paint::Color;
    use life_engine::render::cells::SoftwareRasterizer;
    use life_sim::Pattern;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn init_runs_then_terminates() {
        let s = LoopState::Init.on(LoopEvent::Initialized);
        assert_eq!(s, LoopState::Running);
        assert_eq!(s.on(LoopEvent::Initialized), LoopState::Running);
        assert_eq!(s.on(LoopEvent::ExitRequested), LoopState::Terminated);
    }

    #[test]
    fn exit_during_init_terminates() {
        assert_eq!(LoopState::Init.on(LoopEvent::ExitRequested), LoopState::Terminated);
        assert_eq!(LoopState::Terminated.on(LoopEvent::Initialized), LoopState::Terminated);
    }

    // ── step + draw ───────────────────────────────────────────────────────

    /// Colour at the center of grid cell `(x, y)`, 10 px per cell.
    fn at(r: &SoftwareRasterizer, height: u32, x: u32, y: u32) -> [u8; 4] {
        r.pixel(x * 10 + 5, (height - 1 - y) * 10 + 5).unwrap()
    }

    fn blinker() -> (Grid, CellRenderer<SoftwareRasterizer>) {
        let size = GridSize::new(5, 5).unwrap();
        let mut grid = Grid::empty(size);
        grid.place(Pattern::Blinker, 1, 2).unwrap();
        let raster = SoftwareRasterizer::new(50, 50, Color::RED);
        (grid, CellRenderer::new(raster, extent_of(size)))
    }

    #[test]
    fn presented_frame_shows_the_state_before_the_step() {
        let (mut grid, mut renderer) = blinker();

        assert_eq!(draw_generation(&grid, &mut renderer), 25);
        assert_eq!(finish_frame(&mut grid, FrameOutcome::Presented), AppControl::Continue);

        let r = renderer.pipeline();
        // Horizontal phase is drawn; the vertical phase is now current.
        assert_eq!(at(r, 5, 1, 2), WHITE);
        assert_eq!(at(r, 5, 3, 2), WHITE);
        assert_eq!(at(r, 5, 2, 1), BLACK);
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.current().get(2, 1).map(|c| c.is_alive()), Some(true));

        draw_generation(&grid, &mut renderer);
        finish_frame(&mut grid, FrameOutcome::Presented);
        let r = renderer.pipeline();
        assert_eq!(at(r, 5, 2, 1), WHITE);
        assert_eq!(at(r, 5, 2, 3), WHITE);
        assert_eq!(at(r, 5, 1, 2), BLACK);
    }

    #[test]
    fn skipped_frame_keeps_the_generation() {
        let (mut grid, mut renderer) = blinker();
        let before = grid.current().clone();

        draw_generation(&grid, &mut renderer);
        assert_eq!(finish_frame(&mut grid, FrameOutcome::Skipped), AppControl::Continue);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.current(), &before);

        assert_eq!(finish_frame(&mut grid, FrameOutcome::Lost), AppControl::Exit);
        assert_eq!(grid.generation(), 0);
    }
}
