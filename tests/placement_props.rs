use broadside::{
    place_fleet_randomly, place_ship, validate, Grid, Orientation, CELL_COUNT, FLEET, GRID_WIDTH,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    any::<bool>().prop_map(Orientation::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_placements_never_wrap(
        ship_idx in 0..FLEET.len(),
        start in 0..CELL_COUNT + 20,
        orient in orientation(),
    ) {
        let ship = FLEET[ship_idx];
        let len = ship.length();
        let v = validate(&Grid::new(), ship, start, orient);
        let fits = match orient {
            Orientation::Horizontal => start < CELL_COUNT && start % GRID_WIDTH + len - 1 < GRID_WIDTH,
            Orientation::Vertical => start + (len - 1) * GRID_WIDTH < CELL_COUNT,
        };
        prop_assert_eq!(v.valid, fits);
        if v.valid {
            prop_assert_eq!(v.cells.len(), len);
            prop_assert!(v.cells.iter().all(|&c| c < CELL_COUNT));
            if orient == Orientation::Horizontal {
                prop_assert!(v.cells.iter().all(|&c| c / GRID_WIDTH == start / GRID_WIDTH));
            }
        } else {
            prop_assert!(v.cells.is_empty());
        }
    }

    #[test]
    fn random_fleets_never_overlap(seed in any::<u64>()) {
        let mut grid = Grid::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        place_fleet_randomly(&mut grid, &FLEET, &mut rng).unwrap();
        // cells are claimed once, so a full count means no sharing
        prop_assert_eq!(grid.occupied_count(), TOTAL_SHIP_CELLS);
        for ship in FLEET {
            prop_assert_eq!(grid.cells_of(ship.name()).count(), ship.length());
        }
    }

    #[test]
    fn rejected_placement_leaves_grid_unchanged(
        seed in any::<u64>(),
        start in 0..CELL_COUNT,
        orient in orientation(),
    ) {
        let mut grid = Grid::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        // everything but the carrier
        place_fleet_randomly(&mut grid, &FLEET[..4], &mut rng).unwrap();
        let before = grid.clone();
        let carrier = FLEET[4];
        let legal = validate(&grid, carrier, start, orient).is_legal();
        let result = place_ship(&mut grid, carrier, start, orient);
        prop_assert_eq!(result.is_ok(), legal);
        if !legal {
            prop_assert_eq!(&grid, &before);
        } else {
            prop_assert_eq!(grid.occupied_count(), TOTAL_SHIP_CELLS);
        }
    }
}
