use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use life_engine::core::{App, AppControl, FrameCtx};
use life_engine::input::InputState;
use life_engine::render::RenderCtx;
use life_engine::render::cells::{CellRenderer, WgpuCellPipeline};
use life_sim::Grid;

use crate::config::StudioConfig;
use crate::frame::{draw_generation, extent_of, finish_frame, LoopEvent, LoopState};

/// The viewer: owns the grid and, once initialized, the GPU cell renderer.
pub struct LifeApp {
    config: StudioConfig,
    grid: Grid,
    state: LoopState,
    renderer: Option<CellRenderer<WgpuCellPipeline>>,
}

impl LifeApp {
    /// Allocates and seeds the grid. GPU resources wait for the first frame.
    pub fn new(config: StudioConfig) -> Result<Self> {
        let size = config.grid_size()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "seeding {}x{} grid with seed {seed} at density {}",
            size.width(),
            size.height(),
            config.density
        );

        let grid = Grid::random(size, &mut StdRng::seed_from_u64(seed), config.density)
            .context("failed to seed grid")?;

        Ok(Self {
            config,
            grid,
            state: LoopState::Init,
            renderer: None,
        })
    }

    /// Compiles the shader program and builds one primitive per cell.
    fn init(&mut self, rctx: &RenderCtx<'_>) -> Result<()> {
        let extent = extent_of(self.grid.size());
        let pipeline = WgpuCellPipeline::new(rctx, extent.cell_count())
            .context("failed to build cell pipeline")?;
        let renderer = CellRenderer::new(pipeline, extent);

        log::info!("allocated {} cell primitives", renderer.pipeline().primitive_count());
        self.renderer = Some(renderer);
        self.state = self.state.on(LoopEvent::Initialized);
        Ok(())
    }

    fn exit_requested(&self, input: &InputState) -> bool {
        input.any_down(&self.config.exit_keys)
    }

    /// Releases every GPU resource the app owns.
    fn terminate(&mut self) {
        if self.state == LoopState::Terminated {
            return;
        }
        self.renderer = None;
        self.state = self.state.on(LoopEvent::ExitRequested);
        log::info!("stopped after {} generations", self.grid.generation());
    }
}

impl App for LifeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        match self.state {
            LoopState::Terminated => return Ok(AppControl::Exit),
            LoopState::Init => self.init(&ctx.render_ctx())?,
            LoopState::Running => {}
        }

        if self.exit_requested(ctx.input) {
            self.terminate();
            return Ok(AppControl::Exit);
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(AppControl::Continue);
        };

        draw_generation(&self.grid, renderer);
        let outcome = ctx.render(self.config.clear_color, |_, target| {
            renderer.pipeline_mut().encode(target);
        });
        let control = finish_frame(&mut self.grid, outcome);

        let interval = self.config.stats_interval;
        if interval > 0 && ctx.time.frame_index % interval == 0 {
            log::debug!(
                "generation {}: population {}, {:.1} fps ({:.2} ms)",
                self.grid.generation(),
                self.grid.current().population(),
                ctx.time.fps,
                ctx.time.dt * 1000.0
            );
        }

        Ok(control)
    }

    fn on_exit(&mut self) {
        self.terminate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::input::{InputEvent, Key, KeyState};

    fn app() -> LifeApp {
        LifeApp::new(StudioConfig::default().grid(10, 10).seed(5)).unwrap()
    }

    #[test]
    fn starts_in_init_with_a_seeded_grid() {
        let a = app();
        assert_eq!(a.state, LoopState::Init);
        assert!(a.renderer.is_none());
        assert_eq!(a.grid.generation(), 0);
    }

    #[test]
    fn same_seed_same_grid() {
        assert_eq!(app().grid.current(), app().grid.current());
    }

    #[test]
    fn escape_requests_exit() {
        let a = app();
        let mut input = InputState::default();
        assert!(!a.exit_requested(&input));

        input.apply_event(InputEvent::Key { key: Key::Escape, state: KeyState::Pressed });
        assert!(a.exit_requested(&input));
    }

    #[test]
    fn q_also_requests_exit() {
        let a = app();
        let mut input = InputState::default();
        input.apply_event(InputEvent::Key { key: Key::Q, state: KeyState::Pressed });
        assert!(a.exit_requested(&input));
    }

    #[test]
    fn terminate_is_idempotent() {
        let mut a = app();
        a.terminate();
        a.terminate();
        assert_eq!(a.state, LoopState::Terminated);
    }

    #[test]
    fn bad_density_fails_construction() {
        assert!(LifeApp::new(StudioConfig::default().density(2.0)).is_err());
    }
}
