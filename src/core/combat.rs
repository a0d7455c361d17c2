//! Shot resolution, per-side hit bookkeeping and sunk-ship detection.

use alloc::vec::Vec;

use super::common::{FireError, ShotOutcome, ShotReport};
use super::config::{FLEET, NUM_SHIPS};
use super::grid::Grid;

/// Hits and sinkings scored by one side against the other side's grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideRecord {
    hits: Vec<&'static str>,
    sunk: Vec<&'static str>,
}

impl SideRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit multiset: one entry per hit on a ship that is not sunk yet.
    pub fn hits(&self) -> &[&'static str] {
        &self.hits
    }

    /// Ships sunk so far, in the order they went down.
    pub fn sunk(&self) -> &[&'static str] {
        &self.sunk
    }

    /// Number of recorded hits against `name`.
    pub fn hit_count(&self, name: &str) -> usize {
        self.hits.iter().filter(|&&h| h == name).count()
    }

    pub fn has_sunk(&self, name: &str) -> bool {
        self.sunk.iter().any(|&s| s == name)
    }

    /// The entire fleet has been sunk.
    pub fn is_victorious(&self) -> bool {
        self.sunk.len() >= NUM_SHIPS
    }

    /// Record a hit and return the ship it sank, if any.
    fn record_hit(&mut self, name: &'static str) -> Option<&'static str> {
        self.hits.push(name);
        let mut sunk_now = None;
        for def in FLEET.iter() {
            if !self.has_sunk(def.name()) && self.hit_count(def.name()) == def.length() {
                self.sunk.push(def.name());
                self.hits.retain(|&h| h != def.name());
                sunk_now = Some(def.name());
            }
        }
        sunk_now
    }
}

/// Fire at `cell` on `target`, crediting any hit to `record`.
///
/// Repeated shots and out-of-range cells are rejected without touching
/// the grid or the record.
pub fn fire(target: &mut Grid, cell: usize, record: &mut SideRecord) -> Result<ShotReport, FireError> {
    let occupant = match target.cell(cell) {
        None => return Err(FireError::InvalidCell),
        Some(c) if c.is_struck() => return Err(FireError::RepeatedShot),
        Some(c) => c.occupant(),
    };
    target.strike(cell);

    let (outcome, sunk) = match occupant {
        Some(name) => (ShotOutcome::Hit, record.record_hit(name)),
        None => (ShotOutcome::Miss, None),
    };

    Ok(ShotReport {
        cell,
        outcome,
        sunk,
        victory: record.is_victorious(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::placement::place_ship;
    use crate::core::ship::Orientation;

    #[test]
    fn sinking_clears_only_that_ship() {
        let mut grid = Grid::new();
        place_ship(&mut grid, FLEET[0], 0, Orientation::Horizontal).unwrap();
        place_ship(&mut grid, FLEET[1], 10, Orientation::Horizontal).unwrap();
        let mut record = SideRecord::new();

        fire(&mut grid, 10, &mut record).unwrap();
        fire(&mut grid, 0, &mut record).unwrap();
        let report = fire(&mut grid, 1, &mut record).unwrap();

        assert_eq!(report.sunk, Some("destroyer"));
        assert_eq!(record.hits(), ["submarine"]);
        assert_eq!(record.sunk(), ["destroyer"]);
        assert!(!report.victory);
    }
}
