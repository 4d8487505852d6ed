//! Cell renderer.
//!
//! | Item | Role |
//! |------|------|
//! | [`geometry`] | `GridExtent`, `CellQuad`, `build_quad` (NDC tiling) |
//! | [`pipeline`] | `ShadingPipeline` trait, the seam between renderer and back-end |
//! | [`renderer`] | `CellRenderer`, one primitive and one draw per cell |
//! | [`gpu`] | wgpu back-end |
//! | [`software`] | CPU rasterizer back-end |

pub mod geometry;
pub mod gpu;
pub mod pipeline;
pub mod renderer;
pub mod software;

pub use geometry::{build_quad, CellQuad, CellVertex, GridExtent, CELL_INDICES};
pub use gpu::{WgpuCellPipeline, CELL_SHADER_WGSL};
pub use pipeline::{fragment_color, PrimitiveId, ShaderError, ShadingPipeline};
pub use renderer::CellRenderer;
pub use software::SoftwareRasterizer;
