//! Ship types and orientation.

use core::fmt;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Rotation shown for the ship tray: 0° horizontal, 90° vertical.
    pub fn angle(self) -> u16 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 90,
        }
    }
}

impl From<bool> for Orientation {
    /// `true` maps to horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.length)
    }
}

/// A ship bound to a start cell and an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipType,
    pub start: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(ship: ShipType, start: usize, orientation: Orientation) -> Self {
        Self {
            ship,
            start,
            orientation,
        }
    }
}
