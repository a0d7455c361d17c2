#![cfg(feature = "std")]

//! Async driver tying a [`Game`] to an interactive frontend.
//!
//! The controller only ever *schedules* its delayed opponent steps. The
//! session turns each [`Continuation`] into a timer, sleeps until it is due
//! and hands it back to [`Game::resume`]. No frontend input is read while
//! timers are outstanding.

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep_until, Duration, Instant};

use crate::core::{config::OPPONENT_DELAY, Continuation, Game, GameView, StartError};
use crate::player::{Player, RandomOpponent};

/// Input from the human side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drop a ship at a cell with the current orientation.
    Place { ship: String, cell: usize },
    /// Show where a ship would land without placing it.
    Preview { ship: String, cell: usize },
    /// Toggle horizontal/vertical placement.
    Flip,
    /// Randomly place every ship still in the tray.
    Auto,
    Start,
    Fire(usize),
    NewGame,
    /// Redraw the table.
    Show,
    Quit,
}

/// Host UI collaborator: supplies commands and draws state.
#[async_trait]
pub trait Frontend: Send {
    /// Next command from the human. `None` once input is closed.
    async fn next_command(&mut self) -> anyhow::Result<Option<Command>>;

    /// Draw the table after a state change.
    fn render(&mut self, view: &GameView);

    /// Report a rejected action or other one-off message.
    fn notify(&mut self, _message: &str) {}

    /// Show the cells `ship` would cover if dropped now.
    fn preview(&mut self, ship: &str, cells: &[usize]) {
        self.notify(&format!("{} would cover {:?}", ship, cells));
    }
}

/// Runtime settings for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Fixed RNG seed for a reproducible game.
    pub seed: Option<u64>,
    /// Delay before each opponent step.
    pub delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            delay: OPPONENT_DELAY,
        }
    }
}

impl SessionConfig {
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Debug)]
struct Timer {
    due: Instant,
    continuation: Continuation,
}

/// One interactive game session.
pub struct Session<P, R> {
    game: Game<P, R>,
    timers: Vec<Timer>,
}

impl Session<RandomOpponent, SmallRng> {
    /// Human against the random opponent, configured from `config`.
    pub fn from_config(config: SessionConfig) -> anyhow::Result<Self> {
        let game = Game::new(RandomOpponent::new(), config.rng(), config.delay)
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self::new(game))
    }
}

impl<P: Player, R: Rng> Session<P, R> {
    pub fn new(game: Game<P, R>) -> Self {
        Self {
            game,
            timers: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game<P, R> {
        &self.game
    }

    /// Timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn arm_timers(&mut self) {
        let now = Instant::now();
        for continuation in self.game.take_scheduled() {
            self.timers.push(Timer {
                due: now + continuation.delay,
                continuation,
            });
        }
    }

    /// Index of the earliest timer; the first scheduled wins a tie.
    fn next_timer(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .min_by_key(|(_, t)| t.due)
            .map(|(i, _)| i)
    }

    /// Fire every outstanding timer in due order, including any scheduled
    /// by the continuations themselves. Ties fire in scheduling order.
    pub async fn run_timers<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        self.arm_timers();
        while let Some(next) = self.next_timer() {
            let timer = self.timers.remove(next);
            sleep_until(timer.due).await;
            if self.game.resume(timer.continuation) {
                frontend.render(&self.game.view());
            }
            self.arm_timers();
        }
    }

    /// Apply one command. Returns `false` when the session should end.
    pub fn apply<F: Frontend + ?Sized>(&mut self, command: Command, frontend: &mut F) -> bool {
        log::debug!("command: {:?}", command);
        match command {
            Command::Place { ship, cell } => {
                if let Err(e) = self.game.place_ship(&ship, cell) {
                    frontend.notify(&format!("Cannot place {}: {}", ship, e));
                }
            }
            Command::Preview { ship, cell } => match self.game.preview(&ship, cell) {
                Ok(cells) => frontend.preview(&ship, &cells),
                Err(e) => frontend.notify(&format!("Cannot place {}: {}", ship, e)),
            },
            Command::Flip => {
                let orientation = self.game.toggle_orientation();
                frontend.notify(&format!("Orientation: {:?} ({}°)", orientation, orientation.angle()));
            }
            Command::Auto => {
                if let Err(e) = self.game.place_remaining_randomly() {
                    frontend.notify(&e.to_string());
                }
            }
            Command::Start => match self.game.start() {
                Ok(()) | Err(StartError::FleetIncomplete) => {}
                Err(e) => frontend.notify(&e.to_string()),
            },
            Command::Fire(cell) => {
                if let Err(e) = self.game.fire_at(cell) {
                    frontend.notify(&e.to_string());
                    return true;
                }
            }
            Command::NewGame => {
                if let Err(e) = self.game.new_game() {
                    frontend.notify(&e.to_string());
                }
            }
            Command::Show => {}
            Command::Quit => return false,
        }
        frontend.render(&self.game.view());
        self.arm_timers();
        true
    }

    /// Drive the game until the frontend quits or closes its input.
    pub async fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> anyhow::Result<()> {
        frontend.render(&self.game.view());
        loop {
            self.run_timers(frontend).await;
            let Some(command) = frontend.next_command().await? else {
                log::debug!("input closed");
                break;
            };
            if !self.apply(command, frontend) {
                break;
            }
        }
        Ok(())
    }
}
