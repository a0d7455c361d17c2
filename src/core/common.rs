//! Common types: placement and combat errors, shot outcomes.

use core::fmt;

/// Which side of the table an action or record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The side across the table.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Result of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship segment.
    Hit,
    /// Shot struck open water.
    Miss,
}

/// Full report of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub cell: usize,
    pub outcome: ShotOutcome,
    /// Ship sunk by this shot, if any.
    pub sunk: Option<&'static str>,
    /// The firing side has now sunk the entire fleet.
    pub victory: bool,
}

/// Errors returned when placing ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Candidate cells leave the grid or wrap around an edge.
    InvalidPlacement,
    /// Candidate cells overlap an already occupied cell.
    ObstructedPlacement,
    /// Named ship is not part of the fleet.
    UnknownShip,
    /// Ship has already been placed on this grid.
    AlreadyPlaced,
    /// Placement attempted outside the placement phase.
    WrongPhase,
    /// Random placement ran out of attempts and reshuffles.
    Exhausted,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidPlacement => write!(f, "Ship placement is out of bounds"),
            PlacementError::ObstructedPlacement => {
                write!(f, "Ship placement overlaps with another ship")
            }
            PlacementError::UnknownShip => write!(f, "Ship name not found in the fleet"),
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
            PlacementError::WrongPhase => write!(f, "Ships can only be placed before the game starts"),
            PlacementError::Exhausted => write!(f, "Unable to place the fleet"),
        }
    }
}

/// Errors returned when firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// Target cell was already fired upon (hit or miss).
    RepeatedShot,
    /// It is not this side's turn, or the game is over.
    ActionOutOfTurn,
    /// Target index is not on the grid.
    InvalidCell,
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::RepeatedShot => write!(f, "That cell was already fired upon"),
            FireError::ActionOutOfTurn => write!(f, "It is not your turn"),
            FireError::InvalidCell => write!(f, "Cell is out of range"),
        }
    }
}

/// Errors returned by `Game::start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// Not every ship of the human fleet is on the grid yet.
    FleetIncomplete,
    /// The game has already left the placement phase.
    ActionOutOfTurn,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::FleetIncomplete => write!(f, "Place all your pieces!"),
            StartError::ActionOutOfTurn => write!(f, "The game has already started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for FireError {}
#[cfg(feature = "std")]
impl std::error::Error for StartError {}
