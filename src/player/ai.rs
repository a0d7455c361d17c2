use rand::Rng;

use crate::core::{
    common::PlacementError,
    config::{CELL_COUNT, FLEET, MAX_PLACEMENT_ATTEMPTS},
    grid::Grid,
    placement,
};

use super::Player;

/// Computer opponent: random fleet layout, uniform random targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomOpponent {
    fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &mut Grid) -> Result<(), PlacementError> {
        placement::place_fleet_randomly(grid, &FLEET, rng)
    }

    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, target: &Grid) -> Option<usize> {
        // re-roll cells that were already fired upon
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let cell = rng.random_range(0..CELL_COUNT);
            if !target.is_struck(cell) {
                return Some(cell);
            }
        }
        // late game: draw uniformly from what is left
        let untried = target.untried().count();
        if untried == 0 {
            return None;
        }
        let pick = rng.random_range(0..untried);
        target.untried().nth(pick)
    }
}
