use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};

use super::geometry::{CellQuad, CellVertex};
use super::pipeline::{PrimitiveId, ShaderError, ShadingPipeline};

/// WGSL source for the cell program.
pub const CELL_SHADER_WGSL: &str = include_str!("shaders/cell.wgsl");

/// Per-draw uniform. Padded to 16 bytes for the uniform address space.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CellUniform {
    alive: i32,
    _pad: [i32; 3],
}

/// GPU-resident geometry of one cell.
struct CellPrimitive {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

#[derive(Debug, Copy, Clone)]
struct PendingDraw {
    primitive: PrimitiveId,
    alive: bool,
}

/// wgpu implementation of [`ShadingPipeline`].
///
/// Every cell owns a vertex and an index buffer, allocated when the primitive
/// is built and released when the pipeline is dropped. Draws are recorded by
/// the trait calls and encoded into one render pass by [`encode`](Self::encode).
///
/// The `alive` uniform lives in a single buffer with one aligned slot per
/// draw, selected with a dynamic offset, so each draw call observes the value
/// set right before it.
pub struct WgpuCellPipeline {
    device: wgpu::Device,
    queue: wgpu::Queue,

    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,

    uniform_stride: u64,
    uniform_capacity: usize,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_staging: Vec<u8>,

    primitives: Vec<CellPrimitive>,
    draws: Vec<PendingDraw>,
    alive: bool,
}

impl WgpuCellPipeline {
    /// Compiles the cell program and sizes the uniform buffer for
    /// `expected_draws` draws per frame.
    ///
    /// Compiler diagnostics and validation errors raised while building the
    /// module and pipeline are captured in an error scope and returned, so
    /// they never reach the device's uncaptured-error handler.
    pub fn new(ctx: &RenderCtx<'_>, expected_draws: usize) -> Result<Self, ShaderError> {
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("life cell shader"),
            source: wgpu::ShaderSource::Wgsl(CELL_SHADER_WGSL.into()),
        });
        check_compilation(&pollster::block_on(shader.get_compilation_info()))?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("life cell bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: Some(cell_uniform_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("life cell pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("life cell pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CellVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Opaque output; no blending.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            log::error!("cell pipeline: {err}");
            return Err(ShaderError::Validation(err.to_string()));
        }

        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let uniform_stride = align_up(std::mem::size_of::<CellUniform>() as u64, alignment);
        let uniform_capacity = expected_draws.max(1);
        let (uniform_buffer, bind_group) =
            create_uniforms(ctx.device, &bind_group_layout, uniform_stride, uniform_capacity);

        log::debug!(
            "cell pipeline ready: {:?}, uniform stride {uniform_stride}, {uniform_capacity} slots",
            ctx.surface_format
        );

        Ok(Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            pipeline,
            bind_group_layout,
            uniform_stride,
            uniform_capacity,
            uniform_buffer,
            bind_group,
            uniform_staging: Vec::new(),
            primitives: Vec::with_capacity(expected_draws),
            draws: Vec::with_capacity(expected_draws),
            alive: false,
        })
    }

    /// Number of primitives currently allocated.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Uploads this frame's uniforms and encodes every recorded draw into one
    /// render pass over `target`. The target is loaded, not cleared.
    pub fn encode(&mut self, target: &mut RenderTarget<'_>) {
        if self.draws.is_empty() {
            return;
        }

        self.ensure_uniform_capacity(self.draws.len());
        self.write_uniforms();

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("life cell pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);

        for (slot, draw) in self.draws.iter().enumerate() {
            let Some(prim) = self.primitives.get(draw.primitive.index()) else { continue };

            let offset = (slot as u64 * self.uniform_stride) as u32;
            rpass.set_bind_group(0, &self.bind_group, &[offset]);
            rpass.set_vertex_buffer(0, prim.vbo.slice(..));
            rpass.set_index_buffer(prim.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..prim.index_count, 0, 0..1);
        }
    }

    fn write_uniforms(&mut self) {
        let stride = self.uniform_stride as usize;
        self.uniform_staging.clear();
        self.uniform_staging.resize(self.draws.len() * stride, 0);

        for (slot, draw) in self.draws.iter().enumerate() {
            let u = CellUniform {
                alive: draw.alive as i32,
                _pad: [0; 3],
            };
            let at = slot * stride;
            self.uniform_staging[at..at + std::mem::size_of::<CellUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&u));
        }

        self.queue.write_buffer(&self.uniform_buffer, 0, &self.uniform_staging);
    }

    fn ensure_uniform_capacity(&mut self, required: usize) {
        if required <= self.uniform_capacity {
            return;
        }

        let new_cap = required.next_power_of_two();
        let (buffer, bind_group) =
            create_uniforms(&self.device, &self.bind_group_layout, self.uniform_stride, new_cap);
        self.uniform_buffer = buffer;
        self.bind_group = bind_group;
        self.uniform_capacity = new_cap;
        log::debug!("cell uniform buffer grown to {new_cap} slots");
    }
}

impl ShadingPipeline for WgpuCellPipeline {
    fn build_primitive(&mut self, quad: &CellQuad) -> PrimitiveId {
        let vbo = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("life cell vbo"),
            contents: bytemuck::cast_slice(&quad.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("life cell ibo"),
            contents: bytemuck::cast_slice(&quad.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        self.primitives.push(CellPrimitive {
            vbo,
            ibo,
            index_count: quad.indices.len() as u32,
        });
        PrimitiveId(self.primitives.len() as u32 - 1)
    }

    fn begin_frame(&mut self) {
        self.draws.clear();
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    fn draw(&mut self, primitive: PrimitiveId) {
        self.draws.push(PendingDraw {
            primitive,
            alive: self.alive,
        });
    }
}

fn create_uniforms(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("life cell uniforms"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("life cell bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: Some(cell_uniform_size()),
            }),
        }],
    });

    (buffer, bind_group)
}

/// Binding size of [`CellUniform`]; non-zero by construction.
fn cell_uniform_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<CellUniform>() as u64)
        .expect("CellUniform has non-zero size by construction")
}

fn align_up(value: u64, alignment: u64) -> u64 {
    if alignment <= 1 {
        return value;
    }
    value.div_ceil(alignment) * alignment
}

/// Logs compiler diagnostics and fails on any error.
fn check_compilation(info: &wgpu::CompilationInfo) -> Result<(), ShaderError> {
    let mut errors = Vec::new();

    for msg in &info.messages {
        let at = msg
            .location
            .as_ref()
            .map(|l| format!("{}:{}: ", l.line_number, l.line_position))
            .unwrap_or_default();

        match msg.message_type {
            wgpu::CompilationMessageType::Error => {
                log::error!("cell shader: {at}{}", msg.message);
                errors.push(format!("{at}{}", msg.message));
            }
            wgpu::CompilationMessageType::Warning => log::warn!("cell shader: {at}{}", msg.message),
            wgpu::CompilationMessageType::Info => log::debug!("cell shader: {at}{}", msg.message),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ShaderError::Compile(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<CellUniform>(), 16);
        assert_eq!(cell_uniform_size().get(), 16);
    }

    #[test]
    fn align_up_rounds_to_offset_alignment() {
        assert_eq!(align_up(16, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(16, 0), 16);
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    fn message(message_type: wgpu::CompilationMessageType, text: &str) -> wgpu::CompilationMessage {
        wgpu::CompilationMessage {
            message: text.to_string(),
            message_type,
            location: Some(wgpu::SourceLocation { line_number: 3, line_position: 7, offset: 40, length: 2 }),
        }
    }

    #[test]
    fn compile_errors_fail_with_location() {
        let info = wgpu::CompilationInfo {
            messages: vec![
                message(wgpu::CompilationMessageType::Warning, "unused variable"),
                message(wgpu::CompilationMessageType::Error, "expected `;`"),
            ],
        };
        match check_compilation(&info) {
            Err(ShaderError::Compile(text)) => assert_eq!(text, "3:7: expected `;`"),
            other => panic!("expected a compile error, got {other:?}"),
        }
    }

    #[test]
    fn warnings_alone_compile() {
        let info = wgpu::CompilationInfo {
            messages: vec![message(wgpu::CompilationMessageType::Warning, "unused variable")],
        };
        assert!(check_compilation(&info).is_ok());
        assert!(check_compilation(&wgpu::CompilationInfo { messages: Vec::new() }).is_ok());
    }

    #[test]
    fn shader_declares_both_entry_points_and_the_alive_uniform() {
        assert!(CELL_SHADER_WGSL.contains("fn vs_main"));
        assert!(CELL_SHADER_WGSL.contains("fn fs_main"));
        assert!(CELL_SHADER_WGSL.contains("alive: i32"));
    }
}
