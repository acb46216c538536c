#![allow(dead_code)]

use std::collections::VecDeque;

use dungeon::config::GameConfig;
use dungeon::entity::movement::DirectionSource;
use dungeon::entity::Direction;
use dungeon::game::Game;
use dungeon::input::GameCommand;
use dungeon::level::{LevelDefinition, LevelSet};
use glam::IVec2;

/// Hands out a fixed list of directions, then repeats the last one.
pub struct ScriptedDirections {
    queue: VecDeque<Direction>,
    last: Direction,
}

impl ScriptedDirections {
    pub fn new(directions: &[Direction]) -> Self {
        Self {
            queue: directions.iter().copied().collect(),
            last: directions.last().copied().unwrap_or(Direction::Up),
        }
    }

    pub fn always(direction: Direction) -> Self {
        Self::new(&[direction])
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        self.queue.pop_front().unwrap_or(self.last)
    }
}

/// A 7x5 room with walls all around.
pub const ROOM: [&str; 5] = ["#######", "#.....#", "#.....#", "#.....#", "#######"];

/// Config starting at `start` with plenty of health.
pub fn config_at(start: IVec2, health: i32) -> GameConfig {
    GameConfig {
        start,
        starting_health: health,
        ..GameConfig::default()
    }
}

pub fn game_with(levels: &[LevelDefinition], start: IVec2, health: i32) -> Game {
    let set = LevelSet::new(levels).unwrap();
    Game::new(set, config_at(start, health)).unwrap()
}

/// Single-level game in `rows`.
pub fn single_level(rows: &[&str], start: IVec2, health: i32) -> Game {
    game_with(&[LevelDefinition::new(rows)], start, health)
}

pub fn step(game: &mut Game, direction: Direction) {
    game.tick(Some(GameCommand::Move(direction)), &mut ScriptedDirections::always(Direction::Up))
        .unwrap();
}

pub fn idle(game: &mut Game, ticks: u64) {
    let mut directions = ScriptedDirections::always(Direction::Up);
    for _ in 0..ticks {
        game.tick(None, &mut directions).unwrap();
    }
}
