//! Core battleship engine (no_std compatible)
//!
//! Placement validation, combat resolution and the turn controller. Only
//! `alloc`, `rand` and the `log` facade are required, so the engine can be
//! embedded in any host that supplies its own rendering and input.

pub mod combat;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;
pub mod view;

// Re-export commonly used types
pub use combat::{fire, SideRecord};
pub use common::{FireError, PlacementError, ShotOutcome, ShotReport, Side, StartError};
pub use config::*;
pub use game::{Continuation, Game, GameState, Phase, Step};
pub use grid::{Cell, Grid};
pub use placement::{place_fleet, place_fleet_randomly, place_ship, validate, Validity};
pub use ship::{Orientation, Placement, ShipType};
pub use view::{CellView, GameView};
