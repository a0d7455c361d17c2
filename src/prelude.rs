//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    ship_by_name, FireError, Game, GameView, Orientation, Phase, PlacementError, ShotOutcome,
    ShotReport, Side, StartError, FLEET,
};
pub use crate::player::{Player, RandomOpponent};

#[cfg(feature = "std")]
pub use crate::player::CliFrontend;
#[cfg(feature = "std")]
pub use crate::session::{Command, Frontend, Session, SessionConfig};
