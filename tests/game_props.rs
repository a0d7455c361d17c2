mod common;

use std::time::Duration;

use broadside::{
    fire, FireError, Game, Phase, Player, RandomOpponent, Side, CELL_COUNT, NUM_SHIPS,
};
use common::drain;
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn started_game(seed: u64) -> Game<RandomOpponent, SmallRng> {
    let mut game = Game::new(RandomOpponent::new(), SmallRng::seed_from_u64(seed), Duration::ZERO).unwrap();
    game.place_remaining_randomly().unwrap();
    game.start().unwrap();
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Plays whole games with a random stand-in for the human side.
    #[test]
    fn exactly_one_side_wins(seed in any::<u64>()) {
        let mut game = started_game(seed);
        let mut stand_in = RandomOpponent::new();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut last = (0, 0);
        let mut turns = 0;

        while !game.is_game_over() {
            turns += 1;
            prop_assert!(turns <= CELL_COUNT);
            let cell = stand_in.select_target(&mut rng, &game.state().opponent_grid).unwrap();
            game.fire_at(cell).unwrap();
            drain(&mut game);

            let now = (game.sunk_count(Side::Player), game.sunk_count(Side::Opponent));
            prop_assert!(now.0 >= last.0 && now.1 >= last.1);
            prop_assert!(now.0 <= NUM_SHIPS && now.1 <= NUM_SHIPS);
            last = now;
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.phase(), Phase::GameOver);
        prop_assert_eq!(game.sunk_count(winner), NUM_SHIPS);
        prop_assert!(game.sunk_count(winner.other()) < NUM_SHIPS);

        // nothing is processed after the game ends
        let before = game.state().clone();
        let untried = game.state().opponent_grid.untried().next();
        if let Some(cell) = untried {
            prop_assert_eq!(game.fire_at(cell), Err(FireError::ActionOutOfTurn));
        }
        prop_assert_eq!(game.state(), &before);
    }

    #[test]
    fn repeated_shot_changes_nothing(seed in any::<u64>(), shots in 1..60usize, pick in any::<prop::sample::Index>()) {
        let game = started_game(seed);
        let mut grid = game.state().opponent_grid.clone();
        let mut record = game.state().player_record.clone();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut stand_in = RandomOpponent::new();
        let mut fired = Vec::new();
        for _ in 0..shots {
            let cell = stand_in.select_target(&mut rng, &grid).unwrap();
            fire(&mut grid, cell, &mut record).unwrap();
            fired.push(cell);
        }

        let again = fired[pick.index(fired.len())];
        let before = (grid.clone(), record.clone());
        prop_assert_eq!(fire(&mut grid, again, &mut record), Err(FireError::RepeatedShot));
        prop_assert_eq!((grid, record), before);
    }
}
