#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use broadside::{
    place_fleet, Command, Frontend, Game, GameView, Grid, Orientation, Placement, PlacementError,
    Player, FLEET,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Every ship horizontal at the start of its own row: destroyer on row 0,
/// submarine on row 1, ... carrier on row 4.
pub fn row_layout() -> Vec<Placement> {
    FLEET
        .iter()
        .enumerate()
        .map(|(i, ship)| Placement::new(*ship, i * 10, Orientation::Horizontal))
        .collect()
}

/// Cells covered by [`row_layout`], in fleet order.
pub fn row_layout_cells() -> Vec<usize> {
    FLEET
        .iter()
        .enumerate()
        .flat_map(|(i, ship)| (i * 10)..(i * 10 + ship.length()))
        .collect()
}

/// Opponent with a known layout that fires at a fixed list of cells.
pub struct ScriptedOpponent {
    targets: VecDeque<usize>,
}

impl ScriptedOpponent {
    pub fn new(targets: impl IntoIterator<Item = usize>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }
}

impl Player for ScriptedOpponent {
    fn place_fleet<R: Rng + ?Sized>(&mut self, _rng: &mut R, grid: &mut Grid) -> Result<(), PlacementError> {
        place_fleet(grid, &row_layout()).map_err(|(_, e)| e)
    }

    fn select_target<R: Rng + ?Sized>(&mut self, _rng: &mut R, target: &Grid) -> Option<usize> {
        self.targets
            .pop_front()
            .or_else(|| target.untried().next())
    }
}

pub fn scripted_game(targets: impl IntoIterator<Item = usize>) -> Game<ScriptedOpponent, SmallRng> {
    Game::new(
        ScriptedOpponent::new(targets),
        SmallRng::seed_from_u64(7),
        Duration::from_millis(3000),
    )
    .unwrap()
}

/// Place the human fleet with [`row_layout`] and start.
pub fn place_rows_and_start<P: Player, R: Rng>(game: &mut Game<P, R>) {
    for p in row_layout() {
        game.place_ship(p.ship.name(), p.start).unwrap();
    }
    game.start().unwrap();
}

/// Run every scheduled continuation, including the ones they schedule.
pub fn drain<P: Player, R: Rng>(game: &mut Game<P, R>) {
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

/// Frontend fed from a fixed list of commands that records what it is shown.
#[derive(Default)]
pub struct ScriptedFrontend {
    pub commands: VecDeque<Command>,
    pub views: Vec<GameView>,
    pub notes: Vec<String>,
}

impl ScriptedFrontend {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn last_view(&self) -> &GameView {
        self.views.last().expect("no view rendered")
    }
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }

    fn render(&mut self, view: &GameView) {
        self.views.push(view.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }
}
