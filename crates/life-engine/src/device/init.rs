/// Surface and device options for [`Gpu::new`](super::Gpu::new).
///
/// The default presents with FIFO, which every backend supports. FIFO blocks
/// on the display refresh, so the viewer advances one generation per vblank.
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    /// Falls back to the first supported mode when `None` or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// `false` presents immediately where supported, letting the simulation
    /// run as fast as the GPU can draw it.
    pub fn vsync(mut self, on: bool) -> Self {
        self.present_mode = if on {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsync_toggles_present_mode() {
        assert_eq!(GpuInit::default().present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(GpuInit::default().vsync(false).present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(GpuInit::default().vsync(false).vsync(true).present_mode, wgpu::PresentMode::Fifo);
    }
}
