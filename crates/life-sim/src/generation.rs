use crate::cell::Cell;
use crate::error::GridError;
use crate::rule::next_cell;
use crate::size::GridSize;

/// One complete grid state, stored in [`GridSize::index`] order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Generation {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Generation {
    /// An all-dead generation.
    pub fn empty(size: GridSize) -> Self {
        Self { size, cells: vec![Cell::Dead; size.cell_count()] }
    }

    /// Wraps an existing cell buffer laid out in index order.
    pub fn from_cells(size: GridSize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != size.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: size.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.size
            .contains(x, y)
            .then(|| self.cells[self.size.index(x, y)])
    }

    /// All cells in index order (`x * height + y`).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Yields `(x, y, cell)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| {
            let (x, y) = self.size.coords(i);
            (x, y, c)
        })
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.size.index(x, y);
        self.cells[i] = cell;
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Live cells among the 8 Moore neighbors of an interior cell.
    #[inline]
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let h = self.size.height();
        let c = &self.cells;
        let (w0, w1, w2) = ((x - 1) * h, x * h, (x + 1) * h);

        c[w0 + y - 1].count() + c[w0 + y].count() + c[w0 + y + 1].count()
            + c[w1 + y - 1].count() + c[w1 + y + 1].count()
            + c[w2 + y - 1].count() + c[w2 + y].count() + c[w2 + y + 1].count()
    }
}

/// Computes the generation after `current`.
///
/// Border cells are copied through unchanged; interior cells are evaluated
/// against `current` only, so update order cannot leak into the result.
pub fn advance(current: &Generation) -> Generation {
    let mut next = current.clone();
    advance_into(current, &mut next);
    next
}

/// Writes the interior of the generation after `src` into `dst`.
///
/// `dst` must have the same size as `src`. Its border is left untouched.
pub(crate) fn advance_into(src: &Generation, dst: &mut Generation) {
    debug_assert_eq!(src.size, dst.size);
    let size = src.size;

    for x in 1..size.width() - 1 {
        for y in 1..size.height() - 1 {
            let i = size.index(x, y);
            dst.cells[i] = next_cell(src.cells[i], src.live_neighbors(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: usize, h: usize) -> GridSize {
        GridSize::new(w, h).unwrap()
    }

    fn with_alive(s: GridSize, alive: &[(usize, usize)]) -> Generation {
        let mut g = Generation::empty(s);
        for &(x, y) in alive {
            g.set(x, y, Cell::Alive);
        }
        g
    }

    fn alive_coords(g: &Generation) -> Vec<(usize, usize)> {
        g.iter().filter(|(_, _, c)| c.is_alive()).map(|(x, y, _)| (x, y)).collect()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_cells_checks_length() {
        let s = size(3, 3);
        assert_eq!(
            Generation::from_cells(s, vec![Cell::Dead; 8]),
            Err(GridError::LengthMismatch { expected: 9, actual: 8 })
        );
        assert!(Generation::from_cells(s, vec![Cell::Dead; 9]).is_ok());
    }

    #[test]
    fn get_outside_is_none() {
        let g = Generation::empty(size(4, 4));
        assert_eq!(g.get(4, 0), None);
        assert_eq!(g.get(0, 0), Some(Cell::Dead));
    }

    // ── rule over every 3x3 neighborhood ──────────────────────────────────

    #[test]
    fn every_neighborhood_matches_rule_table() {
        // A 3x3 grid has exactly one interior cell, (1, 1).
        let s = size(3, 3);
        for bits in 0u16..512 {
            let cells: Vec<Cell> = (0..9).map(|i| Cell::from(bits & (1 << i) != 0)).collect();
            let g = Generation::from_cells(s, cells).unwrap();

            let center = g.get(1, 1).unwrap();
            let neighbors = (bits.count_ones() - center.count() as u32) as u8;
            let next = advance(&g);

            assert_eq!(next.get(1, 1), Some(next_cell(center, neighbors)), "bits {bits:09b}");
            for (x, y, c) in g.iter() {
                if s.is_border(x, y) {
                    assert_eq!(next.get(x, y), Some(c));
                }
            }
        }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn lone_cell_dies() {
        let g = with_alive(size(5, 5), &[(2, 2)]);
        assert_eq!(advance(&g).population(), 0);
    }

    #[test]
    fn l_shape_becomes_block() {
        let g = with_alive(size(6, 6), &[(2, 2), (3, 2), (2, 3)]);
        let next = advance(&g);
        assert_eq!(alive_coords(&next), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
        // Still life.
        assert_eq!(advance(&next), next);
    }

    #[test]
    fn blinker_uses_snapshot_not_partial_updates() {
        let g = with_alive(size(5, 5), &[(1, 2), (2, 2), (3, 2)]);
        let next = advance(&g);
        assert_eq!(alive_coords(&next), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(advance(&next), g);
    }

    #[test]
    fn border_cells_are_copied_verbatim() {
        let s = size(4, 4);
        // Fully alive border with a dead interior: interior (1,1) sees 5 live
        // neighbors and stays dead, the border must not change.
        let mut g = Generation::empty(s);
        for (x, y) in (0..4).flat_map(|x| (0..4).map(move |y| (x, y))) {
            if s.is_border(x, y) {
                g.set(x, y, Cell::Alive);
            }
        }
        let next = advance(&g);
        for (x, y, c) in g.iter() {
            if s.is_border(x, y) {
                assert_eq!(next.get(x, y), Some(c));
            }
        }
    }
}
