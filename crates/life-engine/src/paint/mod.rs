//! Color model shared by the runtime and the renderers.

pub mod color;

pub use color::Color;
