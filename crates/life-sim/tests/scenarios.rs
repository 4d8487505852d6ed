use life_sim::{Cell, Grid, GridSize, Pattern};

fn size(w: usize, h: usize) -> GridSize {
    GridSize::new(w, h).unwrap()
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.current()
        .iter()
        .filter(|(_, _, c)| c.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn single_cell_dies() {
    let mut grid = Grid::from_alive(size(7, 7), &[(3, 3)]).unwrap();
    grid.step();
    assert_eq!(grid.current().population(), 0);
}

#[test]
fn l_shape_settles_into_block() {
    let mut grid = Grid::empty(size(8, 8));
    grid.place(Pattern::LShape, 3, 3).unwrap();
    grid.step();

    let mut block = Grid::empty(size(8, 8));
    block.place(Pattern::Block, 3, 3).unwrap();
    assert_eq!(grid.current(), block.current());

    for _ in 0..5 {
        grid.step();
        assert_eq!(grid.current(), block.current());
    }
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::empty(size(9, 9));
    grid.place(Pattern::Blinker, 3, 4).unwrap();
    let horizontal = live_cells(&grid);
    assert_eq!(horizontal, vec![(3, 4), (4, 4), (5, 4)]);

    for generation in 1..=40 {
        grid.step();
        let expected = if generation % 2 == 1 {
            vec![(4, 3), (4, 4), (4, 5)]
        } else {
            horizontal.clone()
        };
        assert_eq!(live_cells(&grid), expected, "generation {generation}");
    }
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut grid = Grid::empty(size(12, 12));
    grid.place(Pattern::Glider, 1, 1).unwrap();
    let start = live_cells(&grid);

    for _ in 0..4 {
        grid.step();
    }

    let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    let mut now = live_cells(&grid);
    now.sort();
    let mut expected = shifted;
    expected.sort();
    assert_eq!(now, expected);
}

#[test]
fn live_border_never_changes() {
    let s = size(6, 6);
    let border: Vec<_> = (0..6)
        .flat_map(|x| (0..6).map(move |y| (x, y)))
        .filter(|&(x, y)| s.is_border(x, y))
        .collect();
    let mut grid = Grid::from_alive(s, &border).unwrap();

    for _ in 0..25 {
        grid.step();
        for &(x, y) in &border {
            assert_eq!(grid.current().get(x, y), Some(Cell::Alive));
        }
    }
}

#[test]
fn snapshot_is_what_was_current() {
    let mut grid = Grid::empty(size(9, 9));
    grid.place(Pattern::Glider, 2, 2).unwrap();

    for _ in 0..8 {
        let before = grid.current().clone();
        let snapshot = grid.step();
        assert_eq!(snapshot, &before);
    }
}
