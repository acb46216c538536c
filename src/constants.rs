//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2};

/// Target duration of one frame (and therefore one simulation tick).
pub const LOOP_TIME: Duration = Duration::from_millis(16);

/// Highest coordinate the movement resolver will step to, on either axis.
///
/// This is independent of the size of the level being played.
pub const GRID_MAX: i32 = 11;

/// Throttled effects (AI, hazards, health check) run every this many ticks.
pub const THROTTLE_INTERVAL: u32 = 25;

/// Number of frames a damage icon stays visible.
pub const DAMAGE_ICON_LIFETIME: u32 = 100;

/// Text shown when a trap bites.
pub const TRAP_TEXT: &str = "Ouch!";

/// Where the player appears on the first level.
pub const PLAYER_START: IVec2 = IVec2::new(11, 1);

/// Health the player starts the game with.
pub const STARTING_HEALTH: i32 = 1;

/// Coins granted by a piggy bank tile.
pub const PIGGY_COINS: u32 = 100;

/// The size of each tile in the windowed frontend, in pixels.
pub const TILE_SIZE: u32 = 32;

/// Size of the level area in the windowed frontend, in tiles.
pub const BOARD_TILES: UVec2 = UVec2::new(13, 10);

/// Width of the HUD panel to the right of the board, in pixels.
pub const HUD_WIDTH: u32 = 8 * TILE_SIZE;

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(BOARD_TILES.x * TILE_SIZE + HUD_WIDTH, BOARD_TILES.y * TILE_SIZE);

pub const GAME_TITLE: &str = "2D Dungeon Game";
pub const WELCOME_TEXT: &str = "Willkommen! Dies ist das 2D-Dungeon-Spiel!";
pub const WIN_TEXT: &str = "YOU WIN! GAME OVER!";
pub const DEATH_TEXT: &str = "YOU DIED! GAME OVER!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_inside_clamp() {
        assert!((0..=GRID_MAX).contains(&PLAYER_START.x));
        assert!((0..=GRID_MAX).contains(&PLAYER_START.y));
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(CANVAS_SIZE.x, 13 * 32 + 8 * 32);
        assert_eq!(CANVAS_SIZE.y, 10 * 32);
    }

    #[test]
    fn test_throttle_interval_nonzero() {
        assert_ne!(THROTTLE_INTERVAL, 0);
    }
}
