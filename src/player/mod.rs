//! Player trait and implementations
//!
//! The automated side of the table is driven through [`Player`]:
//! - RandomOpponent: places its fleet and fires uniformly at random
//! - CliFrontend: interactive terminal frontend for the human side (std only)

use rand::Rng;

use crate::core::{
    common::{PlacementError, ShotReport},
    grid::Grid,
};

/// Interface implemented by automated players.
pub trait Player {
    /// Place the whole fleet onto the provided grid.
    fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &mut Grid) -> Result<(), PlacementError>;

    /// Choose the next cell to fire at on `target`. Returns `None` only when
    /// every cell has already been fired upon.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, target: &Grid) -> Option<usize>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _report: &ShotReport) {}
}

pub mod ai;
pub use ai::RandomOpponent;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliFrontend;
