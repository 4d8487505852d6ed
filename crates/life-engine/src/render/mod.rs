//! GPU rendering subsystem.
//!
//! The only drawable is a grid cell: one quad per cell, created once and
//! drawn once per frame with an alive/dead uniform. Geometry is authored
//! directly in normalized device coordinates, so no viewport transform is
//! involved.

mod ctx;
pub mod cells;

pub use ctx::{RenderCtx, RenderTarget};
