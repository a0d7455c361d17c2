//! Square grid of cells addressed by linear index.

use core::fmt;

use super::config::{CELL_COUNT, GRID_WIDTH};

/// A single addressable grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupant: Option<&'static str>,
    struck: bool,
}

impl Cell {
    /// Name of the ship occupying this cell.
    pub fn occupant(&self) -> Option<&'static str> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Cell has been fired upon.
    pub fn is_struck(&self) -> bool {
        self.struck
    }

    pub fn is_hit(&self) -> bool {
        self.struck && self.occupant.is_some()
    }

    pub fn is_miss(&self) -> bool {
        self.struck && self.occupant.is_none()
    }
}

/// `GRID_WIDTH`×`GRID_WIDTH` cells in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid with no ships and no shots.
    pub fn new() -> Self {
        Self {
            cells: [Cell::default(); CELL_COUNT],
        }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// (row, column) of a linear index.
    pub fn coords(index: usize) -> (usize, usize) {
        (index / GRID_WIDTH, index % GRID_WIDTH)
    }

    /// Linear index of (row, column), if on the grid.
    pub fn index(row: usize, col: usize) -> Option<usize> {
        (row < GRID_WIDTH && col < GRID_WIDTH).then_some(row * GRID_WIDTH + col)
    }

    /// Whether `index` has been fired upon. Out-of-range indices are never struck.
    pub fn is_struck(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.struck)
    }

    /// Indices of cells that have not yet been fired upon.
    pub fn untried(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.struck)
            .map(|(i, _)| i)
    }

    /// Indices occupied by the named ship.
    pub fn cells_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.occupant == Some(name))
            .map(|(i, _)| i)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupant.is_some()).count()
    }

    /// Claim a cell for a ship. Returns `false` and leaves the cell alone if
    /// it is already occupied or out of range; occupancy never changes once set.
    pub(crate) fn occupy(&mut self, index: usize, name: &'static str) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.occupant.is_none() => {
                cell.occupant = Some(name);
                true
            }
            _ => false,
        }
    }

    /// Mark a cell as fired upon. Returns `false` if it already was.
    pub(crate) fn strike(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if !cell.struck => {
                cell.struck = true;
                true
            }
            _ => false,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.chunks(GRID_WIDTH) {
            write!(f, "  ")?;
            for cell in row {
                let ch = match (cell.occupant, cell.struck) {
                    (Some(_), true) => 'X',
                    (None, true) => 'o',
                    (Some(_), false) => 'S',
                    (None, false) => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
