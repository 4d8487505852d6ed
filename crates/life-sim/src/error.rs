use thiserror::Error;

/// Errors raised while constructing or editing a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Both dimensions must be at least 3 so that an interior exists.
    #[error("grid {width}x{height} is too small; each side must be at least 3")]
    TooSmall { width: usize, height: usize },

    /// A write targeted a border cell or a cell outside the grid.
    #[error("cell ({x}, {y}) is outside the grid interior")]
    OutOfBounds { x: usize, y: usize },

    /// A cell buffer did not match the grid's cell count.
    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Seeding density must lie in `[0, 1]`.
    #[error("density {0} is not a probability")]
    InvalidDensity(f64),
}
