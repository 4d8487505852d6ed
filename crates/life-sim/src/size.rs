use crate::error::GridError;

/// Validated grid dimensions.
///
/// Cells are stored x-major: `index(x, y) = x * height + y`. For a square grid
/// this is the familiar `x * W + y`; for non-square grids it stays a bijection
/// onto `[0, W * H)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Smallest side length that still leaves an interior cell.
    pub const MIN_SIDE: usize = 3;

    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(GridError::TooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Border cells are frozen for the lifetime of a grid.
    #[inline]
    pub fn is_border(self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    #[inline]
    pub fn index(self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        x * self.height + y
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coords(self, i: usize) -> (usize, usize) {
        debug_assert!(i < self.cell_count());
        (i / self.height, i % self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_sides_below_three() {
        assert_eq!(
            GridSize::new(2, 10),
            Err(GridError::TooSmall { width: 2, height: 10 })
        );
        assert!(GridSize::new(10, 0).is_err());
        assert!(GridSize::new(3, 3).is_ok());
    }

    // ── index mapping ─────────────────────────────────────────────────────

    #[test]
    fn square_index_matches_x_times_width_plus_y() {
        let s = GridSize::new(100, 100).unwrap();
        assert_eq!(s.index(0, 0), 0);
        assert_eq!(s.index(1, 0), 100);
        assert_eq!(s.index(3, 7), 3 * 100 + 7);
        assert_eq!(s.index(99, 99), 9_999);
    }

    #[test]
    fn index_is_a_bijection_on_square_grid() {
        let s = GridSize::new(100, 100).unwrap();
        let mut seen = vec![false; s.cell_count()];
        for x in 0..s.width() {
            for y in 0..s.height() {
                let i = s.index(x, y);
                assert!(!seen[i], "index {i} produced twice");
                seen[i] = true;
                assert_eq!(s.coords(i), (x, y));
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn index_is_a_bijection_on_non_square_grid() {
        let s = GridSize::new(4, 9).unwrap();
        let mut seen = vec![0u8; s.cell_count()];
        for x in 0..4 {
            for y in 0..9 {
                seen[s.index(x, y)] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    // ── border ────────────────────────────────────────────────────────────

    #[test]
    fn border_classification() {
        let s = GridSize::new(5, 4).unwrap();
        assert!(s.is_border(0, 2));
        assert!(s.is_border(4, 2));
        assert!(s.is_border(2, 0));
        assert!(s.is_border(2, 3));
        assert!(!s.is_border(1, 1));
        assert!(!s.is_border(3, 2));
    }
}
