/// Handles needed to create GPU resources: device, queue and the format the
/// surface presents in.
#[derive(Copy, Clone)]
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue, surface_format: wgpu::TextureFormat) -> Self {
        Self { device, queue, surface_format }
    }
}

/// The current frame's encoder and swapchain view. Passes recorded here
/// load the cleared view and are submitted together when the frame ends.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
