//! Life engine crate.
//!
//! Platform + GPU runtime for the Game of Life viewer: window and event loop,
//! wgpu device/surface, input polling, frame timing, logging, and the cell
//! renderer. It knows nothing about the simulation rule; callers hand it one
//! alive/dead flag per cell each frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod paint;
pub mod render;
