use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What happened to a frame handed to `FrameCtx::render`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// No surface texture this time (timeout, outdated, zero-sized window).
    Skipped,
    /// The surface cannot recover.
    Lost,
}

impl FrameOutcome {
    pub fn control(self) -> AppControl {
        match self {
            FrameOutcome::Lost => AppControl::Exit,
            FrameOutcome::Presented | FrameOutcome::Skipped => AppControl::Continue,
        }
    }
}

/// Application contract implemented by the executable.
pub trait App {
    /// Called for every window event, before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame. An error is fatal: the runtime stops
    /// and returns it from `Runtime::run`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> anyhow::Result<AppControl>;

    /// Called once when the event loop is shutting down, while the GPU
    /// context still exists. Release GPU resources here.
    fn on_exit(&mut self) {}
}
