/// State of a single grid cell.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Value handed to the shader's integer `alive` uniform.
    #[inline]
    pub fn as_flag(self) -> i32 {
        self as i32
    }

    /// Contribution of this cell to a neighbor count.
    #[inline]
    pub(crate) fn count(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
