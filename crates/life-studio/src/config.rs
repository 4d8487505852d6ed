use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use life_engine::device::GpuInit;
use life_engine::input::Key;
use life_engine::paint::Color;
use life_engine::window::RuntimeConfig;
use life_sim::{GridSize, DEFAULT_DENSITY};

/// Viewer configuration.
///
/// Fixed at start-up; there are no flags or config files. Logging verbosity
/// is the only external knob (`RUST_LOG`).
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title:          String,
    pub window_width:   f64,
    pub window_height:  f64,
    pub grid_width:     usize,
    pub grid_height:    usize,
    /// Probability that a cell starts alive.
    pub density:        f64,
    /// RNG seed; a fresh one is drawn and logged when unset.
    pub seed:           Option<u64>,
    /// Visible only where no cell is drawn.
    pub clear_color:    Color,
    pub exit_keys:      Vec<Key>,
    /// Frames between stats log lines; 0 disables them.
    pub stats_interval: u64,
    /// Pace generations to the display refresh.
    pub vsync:          bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title:          "Game of Life".to_string(),
            window_width:   800.0,
            window_height:  800.0,
            grid_width:     100,
            grid_height:    100,
            density:        DEFAULT_DENSITY,
            seed:           None,
            clear_color:    Color::RED,
            exit_keys:      vec![Key::Escape, Key::Q],
            stats_interval: 120,
            vsync:          true,
        }
    }
}

impl StudioConfig {
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn window_size(mut self, width: f64, height: f64) -> Self {
        self.window_width  = width;
        self.window_height = height;
        self
    }

    pub fn grid(mut self, width: usize, height: usize) -> Self {
        self.grid_width  = width;
        self.grid_height = height;
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::new(self.grid_width, self.grid_height).context("invalid grid dimensions")
    }

    pub fn vsync(mut self, on: bool) -> Self {
        self.vsync = on;
        self
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit::default().vsync(self.vsync)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.window_width, self.window_height),
            resizable:    true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_square_100_grid_at_half_density() {
        let c = StudioConfig::default();
        assert_eq!((c.grid_width, c.grid_height), (100, 100));
        assert_eq!((c.window_width, c.window_height), (800.0, 800.0));
        assert_eq!(c.density, 0.5);
        assert_eq!(c.exit_keys, vec![Key::Escape, Key::Q]);
    }

    #[test]
    fn builder_overrides() {
        let c = StudioConfig::default().title("t").grid(20, 10).seed(9).window_size(300.0, 200.0);
        assert_eq!(c.title, "t");
        assert_eq!(c.grid_size().unwrap().cell_count(), 200);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.runtime_config().initial_size, LogicalSize::new(300.0, 200.0));
    }

    #[test]
    fn tiny_grid_is_rejected() {
        assert!(StudioConfig::default().grid(2, 50).grid_size().is_err());
    }
}
