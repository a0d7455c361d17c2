//! Read-only snapshot of a game for the frontend.
//!
//! The frontend translates these flags into its own visuals; nothing flows
//! back from the view into the model.

use alloc::{string::String, vec::Vec};

use super::combat::SideRecord;
use super::common::Side;
use super::game::Phase;
use super::grid::Grid;
use super::ship::Orientation;

/// Visual state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct CellView {
    /// A ship sits here. Only ever set on the owner's own grid.
    pub occupied: bool,
    pub hit: bool,
    pub miss: bool,
    /// The ship on this cell has been sunk.
    pub sunk: bool,
}

/// Everything a frontend needs to draw the table after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameView {
    pub phase: Phase,
    pub status: String,
    pub turn: Option<Side>,
    pub turn_text: &'static str,
    pub orientation: Orientation,
    pub game_over: bool,
    pub winner: Option<Side>,
    /// Ships the human still has to place.
    pub unplaced: Vec<&'static str>,
    /// Player's own grid, ships revealed.
    pub player_grid: Vec<CellView>,
    /// Opponent grid as seen by the player, ships hidden.
    pub opponent_grid: Vec<CellView>,
}

/// Per-cell flags for `grid`. `sunk_by` holds the sinkings scored against it.
pub fn cell_views(grid: &Grid, sunk_by: &SideRecord, reveal: bool) -> Vec<CellView> {
    grid.cells()
        .iter()
        .map(|cell| CellView {
            occupied: reveal && cell.is_occupied(),
            hit: cell.is_hit(),
            miss: cell.is_miss(),
            sunk: cell.occupant().is_some_and(|name| sunk_by.has_sunk(name)),
        })
        .collect()
}
