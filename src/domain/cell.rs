/// State of a candidate coordinate while a generation is being decided.
/// A live cell has no identity beyond its coordinate; this enum only carries
/// the rule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// B3/S23. Births need exactly three live neighbors; a live cell keeps
    /// going with two or three and dies with any other count.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
