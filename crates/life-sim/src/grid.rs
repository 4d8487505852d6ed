use rand::Rng;

use crate::cell::Cell;
use crate::error::GridError;
use crate::generation::{Generation, advance_into};
use crate::pattern::Pattern;
use crate::size::GridSize;

/// Probability that a cell starts alive when seeding at random.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Double-buffered grid state.
///
/// `current` is authoritative. [`step`](Self::step) computes into `next` and
/// swaps the two buffers, so no generation is ever copied. Both buffers always
/// carry the same border, which is never written after seeding.
#[derive(Debug, Clone)]
pub struct Grid {
    current: Generation,
    next: Generation,
    generation: u64,
}

impl Grid {
    /// An all-dead grid.
    pub fn empty(size: GridSize) -> Self {
        Self::from_generation(Generation::empty(size))
    }

    /// Uses `generation` as the initial state, border included.
    pub fn from_generation(generation: Generation) -> Self {
        Self {
            next: generation.clone(),
            current: generation,
            generation: 0,
        }
    }

    /// A grid whose only live cells are `alive`. Border coordinates are allowed
    /// and stay frozen like any other border cell.
    pub fn from_alive(size: GridSize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut g = Generation::empty(size);
        for &(x, y) in alive {
            if !size.contains(x, y) {
                return Err(GridError::OutOfBounds { x, y });
            }
            g.set(x, y, Cell::Alive);
        }
        Ok(Self::from_generation(g))
    }

    /// A grid with every cell independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(
        size: GridSize,
        rng: &mut R,
        density: f64,
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(size);
        grid.seed_random(rng, density)?;
        Ok(grid)
    }

    /// Re-seeds every cell, border included, and resets the generation counter.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        for cell in self.current.cells_mut() {
            *cell = Cell::from(rng.random_bool(density));
        }
        self.next.clone_from(&self.current);
        self.generation = 0;

        log::debug!(
            "seeded {}x{} grid at density {density}: {} alive",
            self.size().width(),
            self.size().height(),
            self.current.population()
        );
        Ok(())
    }

    /// Writes `pattern` with its origin at `(x, y)`.
    ///
    /// Every target cell must be an interior cell; otherwise nothing is written.
    pub fn place(&mut self, pattern: Pattern, x: usize, y: usize) -> Result<(), GridError> {
        let size = self.size();
        let targets = pattern
            .cells()
            .iter()
            .map(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(tx), Some(ty)) => Ok((tx, ty)),
                _ => Err(GridError::OutOfBounds { x, y }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(&(bx, by)) = targets
            .iter()
            .find(|&&(tx, ty)| !size.contains(tx, ty) || size.is_border(tx, ty))
        {
            return Err(GridError::OutOfBounds { x: bx, y: by });
        }

        for (tx, ty) in targets {
            self.current.set(tx, ty, Cell::Alive);
        }
        Ok(())
    }

    /// Advances one generation and returns the state it advanced from.
    ///
    /// The returned snapshot is frozen until the next call, which is what the
    /// renderer draws for this frame.
    pub fn step(&mut self) -> &Generation {
        advance_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        &self.next
    }

    #[inline]
    pub fn current(&self) -> &Generation {
        &self.current
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.current.size()
    }

    /// Number of completed steps since construction or the last reseed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
