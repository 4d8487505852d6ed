//! Standard Game of Life rule (B3/S23).

use crate::cell::Cell;

/// Returns the next state of a cell given its current state and the number of
/// live cells in its Moore neighborhood.
///
/// A live cell survives with 2 or 3 neighbors; a dead cell is born with
/// exactly 3. Every other case is dead.
#[inline]
pub fn next_cell(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_outcome_table() {
        // (neighbors, dead ->, alive ->)
        let table = [
            (0, Cell::Dead, Cell::Dead),
            (1, Cell::Dead, Cell::Dead),
            (2, Cell::Dead, Cell::Alive),
            (3, Cell::Alive, Cell::Alive),
            (4, Cell::Dead, Cell::Dead),
            (5, Cell::Dead, Cell::Dead),
            (6, Cell::Dead, Cell::Dead),
            (7, Cell::Dead, Cell::Dead),
            (8, Cell::Dead, Cell::Dead),
        ];
        for (n, from_dead, from_alive) in table {
            assert_eq!(next_cell(Cell::Dead, n), from_dead, "dead with {n}");
            assert_eq!(next_cell(Cell::Alive, n), from_alive, "alive with {n}");
        }
    }
}
