//! This module contains the main game logic and state.

use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::audio::Sound;
use crate::config::GameConfig;
use crate::entity::movement::DirectionSource;
use crate::entity::EnemyKind;
use crate::error::{GameError, GameResult};
use crate::input::GameCommand;
use crate::level::LevelSet;

use self::state::{GameState, Status};

pub mod ai;
pub mod combat;
pub mod interact;
pub mod state;

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the level set and the player's state, and advances both one tick
/// at a time. Frontends feed it one command per tick and read the state back
/// to draw it.
pub struct Game {
    state: GameState,
    levels: LevelSet,
    config: GameConfig,
    tick: u64,
}

impl Game {
    /// Starts a game on the first level of `levels`.
    pub fn new(levels: LevelSet, config: GameConfig) -> GameResult<Game> {
        if config.throttle_interval == 0 {
            return Err(GameError::InvalidState("throttle interval must be positive".into()));
        }

        let level = levels.instantiate(0)?;
        if !level.grid.contains(config.start) {
            return Err(GameError::InvalidState(format!(
                "start position {} lies outside the first level",
                config.start
            )));
        }

        info!(levels = levels.len(), start = ?config.start, "Game created");
        Ok(Game {
            state: GameState::new(level, config.start, config.starting_health),
            levels,
            config,
            tick: 0,
        })
    }

    /// Runs one logical tick.
    ///
    /// The command (if any) is applied first, then the teleport check. Every
    /// `throttle_interval`-th tick additionally checks for death, moves the
    /// fireballs, applies contact damage and moves the monsters, in that order.
    #[instrument(level = "trace", skip_all, fields(tick = self.tick))]
    pub fn tick(&mut self, command: Option<GameCommand>, directions: &mut impl DirectionSource) -> GameResult<()> {
        if self.state.status.is_terminal() {
            return Ok(());
        }

        self.state.age_damage_icons();

        match command {
            Some(GameCommand::Move(direction)) => {
                interact::move_player(&mut self.state, &self.levels, direction, &self.config)?;
            }
            Some(GameCommand::Attack) => combat::melee(&mut self.state),
            Some(GameCommand::Quit) => {
                info!("Player quit");
                self.state.status = Status::Exited;
                return Ok(());
            }
            None => {}
        }

        if self.state.status.is_terminal() {
            info!(status = ?self.state.status, "Game ended");
            return Ok(());
        }

        interact::check_teleporters(&mut self.state);
        self.tick += 1;

        if self.tick % u64::from(self.config.throttle_interval) == 0 {
            self.throttled(directions)?;
        }

        Ok(())
    }

    fn throttled(&mut self, directions: &mut impl DirectionSource) -> GameResult<()> {
        if self.state.health <= 0 {
            info!(tick = self.tick, health = self.state.health, "Player died");
            self.state.status = Status::GameOver;
            return Ok(());
        }

        ai::move_projectiles(&mut self.state.level)?;
        combat::resolve_contacts(&mut self.state, self.config.clamp_armor);

        for kind in [EnemyKind::Skeleton, EnemyKind::Snake, EnemyKind::Boss] {
            ai::move_enemies(&mut self.state.level, kind, directions)?;
        }
        debug!(tick = self.tick, "Monsters moved");
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Ticks completed so far. Ticks cut short by the game ending are not counted.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Takes the sound cues raised since the last call.
    pub fn drain_sounds(&mut self) -> SmallVec<[Sound; 4]> {
        std::mem::take(&mut self.state.sounds)
    }
}
