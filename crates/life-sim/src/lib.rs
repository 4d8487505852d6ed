//! Game of Life simulation on a fixed-size bounded grid.
//!
//! This crate owns cell state and the update rule. It has no knowledge of
//! windows, GPUs, or how cells are drawn; the renderer only ever sees the
//! snapshot returned by [`Grid::step`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`size`] | `GridSize`, coordinate <-> index mapping |
//! | [`cell`] | `Cell` |
//! | [`generation`] | `Generation` (one full buffer), [`advance`] |
//! | [`rule`] | B3/S23 outcome table |
//! | [`grid`] | `Grid` (double-buffered current/next) |
//! | [`pattern`] | built-in seed patterns |
//! | [`error`] | `GridError` |
//!
//! # Boundary policy
//!
//! Border cells (row/column `0` and `W-1`/`H-1`) are never evaluated. They
//! keep whatever value they were seeded with for the whole run. There is no
//! wraparound.
//!
//! # Quick start
//!
//! ```rust
//! use life_sim::{Grid, GridSize, Pattern};
//!
//! let size = GridSize::new(5, 5).unwrap();
//! let mut grid = Grid::empty(size);
//! grid.place(Pattern::Blinker, 1, 2).unwrap();
//!
//! let before = grid.step().population();
//! assert_eq!(before, 3);
//! assert_eq!(grid.current().population(), 3);
//! ```

pub mod cell;
pub mod error;
pub mod generation;
pub mod grid;
pub mod pattern;
pub mod rule;
pub mod size;

pub use cell::Cell;
pub use error::GridError;
pub use generation::{Generation, advance};
pub use grid::{DEFAULT_DENSITY, Grid};
pub use pattern::Pattern;
pub use size::GridSize;
