use core::time::Duration;

use super::ship::ShipType;

/// Width (and height) of the square grid.
pub const GRID_WIDTH: usize = 10;
/// Number of addressable cells on a grid.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("destroyer", 2),
    ShipType::new("submarine", 3),
    ShipType::new("cruiser", 3),
    ShipType::new("battleship", 4),
    ShipType::new("carrier", 5),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Random start positions tried for a single ship before the fleet is reshuffled.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Full-fleet reshuffles tried before automated placement gives up.
pub const MAX_RESHUFFLES: usize = 32;

/// Observation delay between the player's shot and each opponent step.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(3000);

/// Look up a ship of the standard fleet by name.
pub fn ship_by_name(name: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.name() == name)
}
