use broadside::{Game, Player, RandomOpponent, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use std::time::Duration;

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "player",
        Side::Opponent => "opponent",
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::new(
        RandomOpponent::new(),
        SmallRng::seed_from_u64(seed),
        Duration::ZERO,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.place_remaining_randomly().map_err(|e| anyhow::anyhow!(e))?;
    game.start().map_err(|e| anyhow::anyhow!(e))?;

    // random stand-in for the human side
    let mut stand_in = RandomOpponent::new();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut player_shots = 0usize;

    while !game.is_game_over() {
        let cell = stand_in
            .select_target(&mut rng, &game.state().opponent_grid)
            .ok_or_else(|| anyhow::anyhow!("no untried cell left"))?;
        game.fire_at(cell).map_err(|e| anyhow::anyhow!(e))?;
        player_shots += 1;
        // no delay: run the opponent's continuations straight away
        loop {
            let scheduled = game.take_scheduled();
            if scheduled.is_empty() {
                break;
            }
            for continuation in scheduled {
                game.resume(continuation);
            }
        }
    }

    let winner = game
        .winner()
        .map(side_name)
        .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;
    let opponent_shots = game.state().player_grid.cells().iter().filter(|c| c.is_struck()).count();

    let result = json!({
        "seed": seed,
        "player": {"shots": player_shots, "sunk": game.sunk_count(Side::Player)},
        "opponent": {"shots": opponent_shots, "sunk": game.sunk_count(Side::Opponent)},
        "winner": winner,
        "status": game.status(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
