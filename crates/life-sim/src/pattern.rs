/// Small built-in patterns, expressed as live-cell offsets from an origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pattern {
    /// Period-2 oscillator; starts horizontal.
    Blinker,
    /// 2x2 still life.
    Block,
    /// Three cells of a block; becomes a block after one generation.
    LShape,
    /// Period-4 spaceship travelling towards +x/+y.
    Glider,
}

impl Pattern {
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::LShape => &[(0, 0), (1, 0), (0, 1)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }
}
