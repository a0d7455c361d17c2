//! Turn controller: placement phase, alternating turns and the delayed
//! opponent continuations.

use alloc::{collections::VecDeque, format, string::String, vec::Vec};
use core::time::Duration;
use rand::Rng;

use super::{
    combat::{self, SideRecord},
    common::{FireError, PlacementError, ShotOutcome, ShotReport, Side, StartError},
    config::{ship_by_name, CELL_COUNT, FLEET},
    grid::Grid,
    placement,
    ship::{Orientation, ShipType},
    view::{cell_views, GameView},
};
use crate::player::Player;

/// Controller phase. `NotStarted` is folded into [`Game::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    AwaitingPlacement,
    PlayerTurn,
    OpponentTurn,
    GameOver,
}

/// Work the controller wants done after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Opponent takes the turn and starts "thinking".
    OpponentThinks,
    /// Opponent's shot is resolved.
    OpponentFires,
    /// Player input is accepted again.
    PlayerResumes,
}

/// A delayed step tagged with the game generation that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub generation: u64,
    pub step: Step,
    pub delay: Duration,
}

/// Complete mutable state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player_grid: Grid,
    pub opponent_grid: Grid,
    /// `None` until the game has started.
    pub whose_turn: Option<Side>,
    pub game_over: bool,
    pub winner: Option<Side>,
    /// Hits and sinkings scored by the player.
    pub player_record: SideRecord,
    /// Hits and sinkings scored by the opponent.
    pub opponent_record: SideRecord,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player_grid: Grid::new(),
            opponent_grid: Grid::new(),
            whose_turn: None,
            game_over: false,
            winner: None,
            player_record: SideRecord::new(),
            opponent_record: SideRecord::new(),
        }
    }

    /// Record of what `side` has scored.
    pub fn record(&self, side: Side) -> &SideRecord {
        match side {
            Side::Player => &self.player_record,
            Side::Opponent => &self.opponent_record,
        }
    }

    /// Resolve a shot fired by `side` at the other side's grid.
    pub fn fire_from(&mut self, side: Side, cell: usize) -> Result<ShotReport, FireError> {
        if self.game_over {
            return Err(FireError::ActionOutOfTurn);
        }
        let report = match side {
            Side::Player => combat::fire(&mut self.opponent_grid, cell, &mut self.player_record)?,
            Side::Opponent => combat::fire(&mut self.player_grid, cell, &mut self.opponent_record)?,
        };
        if report.victory {
            self.game_over = true;
            self.winner = Some(side);
            self.whose_turn = None;
        }
        Ok(report)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single owner of a game: the human player against an automated `P`.
pub struct Game<P, R> {
    state: GameState,
    phase: Phase,
    orientation: Orientation,
    status: String,
    turn_text: &'static str,
    generation: u64,
    delay: Duration,
    scheduled: VecDeque<Continuation>,
    opponent: P,
    rng: R,
}

impl<P: Player, R: Rng> Game<P, R> {
    /// Create a game in the placement phase with the opponent fleet already
    /// laid out. `delay` is the observation delay for each opponent step.
    pub fn new(opponent: P, rng: R, delay: Duration) -> Result<Self, PlacementError> {
        let mut game = Self {
            state: GameState::new(),
            phase: Phase::AwaitingPlacement,
            orientation: Orientation::Horizontal,
            status: String::new(),
            turn_text: "",
            generation: 0,
            delay,
            scheduled: VecDeque::new(),
            opponent,
            rng,
        };
        game.deploy_opponent()?;
        Ok(game)
    }

    fn deploy_opponent(&mut self) -> Result<(), PlacementError> {
        self.opponent
            .place_fleet(&mut self.rng, &mut self.state.opponent_grid)?;
        self.status = String::from("Place your ships");
        log::debug!("opponent fleet deployed (generation {})", self.generation);
        Ok(())
    }

    /// Discard the current game and set up a fresh one. Continuations
    /// scheduled by the old game become stale.
    pub fn new_game(&mut self) -> Result<(), PlacementError> {
        self.generation += 1;
        self.state = GameState::new();
        self.scheduled.clear();
        self.phase = Phase::AwaitingPlacement;
        self.orientation = Orientation::Horizontal;
        self.turn_text = "";
        log::info!("new game (generation {})", self.generation);
        self.deploy_opponent()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn turn_text(&self) -> &'static str {
        self.turn_text
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    /// Flip the orientation used for the next human placement.
    pub fn toggle_orientation(&mut self) -> Orientation {
        if self.phase == Phase::AwaitingPlacement {
            self.orientation = self.orientation.flipped();
        }
        self.orientation
    }

    /// Human ships not yet on the grid, in fleet order.
    pub fn unplaced_ships(&self) -> Vec<ShipType> {
        FLEET
            .iter()
            .copied()
            .filter(|def| self.state.player_grid.cells_of(def.name()).next().is_none())
            .collect()
    }

    fn unplaced_ship(&self, name: &str) -> Result<ShipType, PlacementError> {
        if self.phase != Phase::AwaitingPlacement {
            return Err(PlacementError::WrongPhase);
        }
        let ship = ship_by_name(name).ok_or(PlacementError::UnknownShip)?;
        if self.state.player_grid.cells_of(ship.name()).next().is_some() {
            return Err(PlacementError::AlreadyPlaced);
        }
        Ok(ship)
    }

    /// Cells the named ship would cover at `start` with the current
    /// orientation, if that drop would be legal. Changes nothing.
    pub fn preview(&self, name: &str, start: usize) -> Result<Vec<usize>, PlacementError> {
        let ship = self.unplaced_ship(name)?;
        placement::validate(&self.state.player_grid, ship, start, self.orientation).into_result()
    }

    /// Drop a human ship at `start` using the current orientation. A failed
    /// drop leaves the grid unchanged; the caller has to ask again.
    pub fn place_ship(&mut self, name: &str, start: usize) -> Result<Vec<usize>, PlacementError> {
        let result = self.unplaced_ship(name).and_then(|ship| {
            placement::place_ship(&mut self.state.player_grid, ship, start, self.orientation)
        });
        match &result {
            Ok(_) => self.status = format!("Placed your {}", name),
            Err(e) => self.status = format!("Cannot place {} there: {}", name, e),
        }
        result
    }

    /// Randomly place every human ship that is still in the tray.
    pub fn place_remaining_randomly(&mut self) -> Result<(), PlacementError> {
        if self.phase != Phase::AwaitingPlacement {
            return Err(PlacementError::WrongPhase);
        }
        let remaining = self.unplaced_ships();
        placement::place_fleet_randomly(&mut self.state.player_grid, &remaining, &mut self.rng)?;
        self.status = String::from("Ships placed at random");
        Ok(())
    }

    /// Leave the placement phase once the whole human fleet is down.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.phase != Phase::AwaitingPlacement {
            return Err(StartError::ActionOutOfTurn);
        }
        if !self.unplaced_ships().is_empty() {
            self.status = String::from("Place all your pieces!");
            return Err(StartError::FleetIncomplete);
        }
        self.phase = Phase::PlayerTurn;
        self.state.whose_turn = Some(Side::Player);
        self.turn_text = "You shoot!";
        self.status = String::from("The game begins!");
        log::info!("game started");
        Ok(())
    }

    /// Human shot at the opponent grid.
    pub fn fire_at(&mut self, cell: usize) -> Result<ShotReport, FireError> {
        if self.phase != Phase::PlayerTurn || self.state.game_over {
            return Err(FireError::ActionOutOfTurn);
        }
        let report = self.state.fire_from(Side::Player, cell)?;
        log::debug!("player fired at {}: {:?}", cell, report);

        self.status = match (report.outcome, report.sunk) {
            _ if report.victory => String::from("You sunk all the enemy ships. VICTORY!!!"),
            (_, Some(name)) => format!("You sunk the enemy's {}", name),
            (ShotOutcome::Hit, None) => String::from("You hit the enemy ship!"),
            (ShotOutcome::Miss, None) => String::from("You missed!"),
        };

        if self.state.game_over {
            self.finish();
        } else {
            self.phase = Phase::OpponentTurn;
            self.state.whose_turn = Some(Side::Opponent);
            self.schedule(Step::OpponentThinks);
        }
        Ok(report)
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.turn_text = "Game over";
        log::info!("game over, winner: {:?}", self.state.winner);
    }

    fn schedule(&mut self, step: Step) {
        self.scheduled.push_back(Continuation {
            generation: self.generation,
            step,
            delay: self.delay,
        });
    }

    /// Hand over every continuation scheduled since the last call, in order.
    pub fn take_scheduled(&mut self) -> Vec<Continuation> {
        self.scheduled.drain(..).collect()
    }

    /// Run a continuation once its delay has elapsed. Returns `false` when it
    /// was ignored because it is stale or the game is already over.
    pub fn resume(&mut self, continuation: Continuation) -> bool {
        if continuation.generation != self.generation {
            log::debug!("ignoring stale {:?}", continuation);
            return false;
        }
        if self.state.game_over {
            log::debug!("ignoring {:?} after game over", continuation.step);
            return false;
        }
        match continuation.step {
            Step::OpponentThinks => {
                self.turn_text = "Enemy turn";
                self.status = String::from("Enemy is thinking...");
                self.schedule(Step::OpponentFires);
                self.schedule(Step::PlayerResumes);
                true
            }
            Step::OpponentFires => self.opponent_fires().is_some(),
            Step::PlayerResumes => {
                if self.phase != Phase::OpponentTurn {
                    return false;
                }
                self.phase = Phase::PlayerTurn;
                self.state.whose_turn = Some(Side::Player);
                self.turn_text = "Your turn";
                self.status = String::from("Your turn");
                true
            }
        }
    }

    /// Pick a fresh cell on the player grid and fire at it.
    fn opponent_fires(&mut self) -> Option<ShotReport> {
        if self.phase != Phase::OpponentTurn {
            return None;
        }
        for _ in 0..CELL_COUNT {
            let cell = self
                .opponent
                .select_target(&mut self.rng, &self.state.player_grid)?;
            let report = match self.state.fire_from(Side::Opponent, cell) {
                Ok(report) => report,
                Err(FireError::RepeatedShot) => continue,
                Err(e) => {
                    log::warn!("opponent shot at {} rejected: {}", cell, e);
                    return None;
                }
            };
            log::debug!("opponent fired at {}: {:?}", cell, report);
            self.opponent.handle_shot_result(&report);
            self.status = match (report.outcome, report.sunk) {
                _ if report.victory => String::from("Enemy sunk all your ships. You LOST!"),
                (_, Some(name)) => format!("Enemy sunk your {}", name),
                (ShotOutcome::Hit, None) => String::from("Enemy hit your ship!"),
                (ShotOutcome::Miss, None) => String::from("Enemy missed!"),
            };
            if self.state.game_over {
                self.finish();
            }
            return Some(report);
        }
        log::warn!("opponent could not find an untried cell");
        None
    }

    /// Number of ships `side` has sunk.
    pub fn sunk_count(&self, side: Side) -> usize {
        self.state.record(side).sunk().len()
    }

    /// Snapshot for the frontend.
    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            status: self.status.clone(),
            turn: self.state.whose_turn,
            turn_text: self.turn_text,
            orientation: self.orientation,
            game_over: self.state.game_over,
            winner: self.state.winner,
            unplaced: self.unplaced_ships().iter().map(|s| s.name()).collect(),
            player_grid: cell_views(&self.state.player_grid, &self.state.opponent_record, true),
            opponent_grid: cell_views(&self.state.opponent_grid, &self.state.player_record, false),
        }
    }
}

