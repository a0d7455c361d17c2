//! Placement validation and fleet placement.

use alloc::vec::Vec;
use rand::Rng;

use super::common::PlacementError;
use super::config::{CELL_COUNT, GRID_WIDTH, MAX_PLACEMENT_ATTEMPTS, MAX_RESHUFFLES};
use super::grid::Grid;
use super::ship::{Orientation, Placement, ShipType};

/// Outcome of checking a candidate placement against a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    /// Every cell lies on the grid without wrapping a row edge.
    pub valid: bool,
    /// Candidate cells, in ship order. Empty when `valid` is false.
    pub cells: Vec<usize>,
    /// None of the candidate cells is occupied.
    pub unobstructed: bool,
}

impl Validity {
    pub fn is_legal(&self) -> bool {
        self.valid && self.unobstructed
    }

    /// Cells of a legal placement, or the reason it is not.
    pub fn into_result(self) -> Result<Vec<usize>, PlacementError> {
        if !self.valid {
            Err(PlacementError::InvalidPlacement)
        } else if !self.unobstructed {
            Err(PlacementError::ObstructedPlacement)
        } else {
            Ok(self.cells)
        }
    }
}

fn start_in_bounds(ship: ShipType, start: usize, orientation: Orientation) -> bool {
    let len = ship.length();
    if len == 0 || len > GRID_WIDTH || start >= CELL_COUNT {
        return false;
    }
    match orientation {
        Orientation::Horizontal => start % GRID_WIDTH <= GRID_WIDTH - len,
        Orientation::Vertical => start < CELL_COUNT - GRID_WIDTH * (len - 1),
    }
}

fn offset_cell(start: usize, offset: usize, orientation: Orientation) -> usize {
    match orientation {
        Orientation::Horizontal => start + offset,
        Orientation::Vertical => start + offset * GRID_WIDTH,
    }
}

/// Check whether `ship` fits at `start` with `orientation`. Pure.
pub fn validate(grid: &Grid, ship: ShipType, start: usize, orientation: Orientation) -> Validity {
    if !start_in_bounds(ship, start, orientation) {
        return Validity {
            valid: false,
            cells: Vec::new(),
            unobstructed: false,
        };
    }

    let cells: Vec<usize> = (0..ship.length())
        .map(|i| offset_cell(start, i, orientation))
        .collect();

    // each cell must agree with the whole-ship bounds check
    let start_row = start / GRID_WIDTH;
    let valid = cells.iter().all(|&cell| match orientation {
        Orientation::Horizontal => cell < CELL_COUNT && cell / GRID_WIDTH == start_row,
        Orientation::Vertical => cell < CELL_COUNT,
    });
    if !valid {
        return Validity {
            valid: false,
            cells: Vec::new(),
            unobstructed: false,
        };
    }

    let unobstructed = cells
        .iter()
        .all(|&cell| grid.cell(cell).is_some_and(|c| !c.is_occupied()));

    Validity {
        valid,
        cells,
        unobstructed,
    }
}

/// Place a single ship. On failure the grid is left unchanged and no retry
/// is attempted.
pub fn place_ship(
    grid: &mut Grid,
    ship: ShipType,
    start: usize,
    orientation: Orientation,
) -> Result<Vec<usize>, PlacementError> {
    if grid.cells_of(ship.name()).next().is_some() {
        return Err(PlacementError::AlreadyPlaced);
    }
    let cells = validate(grid, ship, start, orientation).into_result()?;
    for &cell in &cells {
        grid.occupy(cell, ship.name());
    }
    log::trace!("placed {} at {} {:?}", ship.name(), start, orientation);
    Ok(cells)
}

/// Place an explicit list of ships in order. Stops at the first ship that
/// does not fit and reports it; ships placed before it stay on the grid.
pub fn place_fleet(
    grid: &mut Grid,
    placements: &[Placement],
) -> Result<(), (ShipType, PlacementError)> {
    for p in placements {
        place_ship(grid, p.ship, p.start, p.orientation).map_err(|e| (p.ship, e))?;
    }
    Ok(())
}

/// Pick a random legal placement for `ship`, trying at most
/// `MAX_PLACEMENT_ATTEMPTS` uniformly random starts and orientations.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    ship: ShipType,
    rng: &mut R,
) -> Option<Placement> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = Orientation::from(rng.random::<bool>());
        let start = rng.random_range(0..CELL_COUNT);
        if validate(grid, ship, start, orientation).is_legal() {
            return Some(Placement::new(ship, start, orientation));
        }
    }
    None
}

/// Randomly place every ship of `fleet` onto `grid`.
///
/// Ships go down in fleet order. If one ship exhausts its attempts the whole
/// fleet is reshuffled on a fresh scratch grid; `grid` is only written once a
/// complete layout has been found, so it is never left half-filled.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &[ShipType],
    rng: &mut R,
) -> Result<(), PlacementError> {
    'reshuffle: for round in 0..MAX_RESHUFFLES {
        let mut scratch = grid.clone();
        for &ship in fleet {
            let Some(p) = random_placement(&scratch, ship, rng) else {
                log::debug!("no room for {} in round {}, reshuffling", ship.name(), round);
                continue 'reshuffle;
            };
            place_ship(&mut scratch, p.ship, p.start, p.orientation)?;
        }
        *grid = scratch;
        return Ok(());
    }
    Err(PlacementError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FLEET;

    /// Only the ship's extent is bounded; a vertical ship may end on the
    /// last row even though a stricter per-cell rule would refuse it.
    #[test]
    fn vertical_ship_may_touch_bottom_row() {
        let grid = Grid::new();
        let v = validate(&grid, FLEET[0], 90, Orientation::Vertical);
        assert!(!v.valid);
        let v = validate(&grid, FLEET[0], 80, Orientation::Vertical);
        assert!(v.is_legal());
        assert_eq!(v.cells, [80, 90]);
    }

    #[test]
    fn out_of_range_start_is_invalid() {
        let grid = Grid::new();
        let v = validate(&grid, FLEET[0], 100, Orientation::Horizontal);
        assert!(!v.valid);
        assert!(v.cells.is_empty());
        assert_eq!(v.into_result(), Err(PlacementError::InvalidPlacement));
    }
}
