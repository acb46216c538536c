//! Runnable shells around the simulation.
//!
//! The terminal frontend is the default; building with the `sdl` feature swaps
//! in an SDL2 window with real sound. Both share the HUD text and frame pacing
//! below.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use crate::constants::{DEATH_TEXT, LOOP_TIME, WIN_TEXT};
use crate::entity::movement::RandomDirections;
use crate::game::state::{GameState, Item, Status};

#[cfg(not(feature = "sdl"))]
mod terminal;
#[cfg(not(feature = "sdl"))]
pub use terminal::App;

#[cfg(feature = "sdl")]
mod sdl;
#[cfg(feature = "sdl")]
pub use sdl::App;

/// Lines of the status panel shown next to the board.
pub fn hud_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![
        format!("Level  {}", state.level_index + 1),
        format!("Coins  {}", state.coins),
        format!("Health {}", bar('♥', state.health)),
        format!("Armor  {}", bar('▣', state.armor)),
        format!("Sword  {}", bar('†', state.sword as i32)),
        format!("Keys   {}", bar('⚷', state.inventory.count(Item::Key) as i32)),
    ];
    if let Some(health) = state.boss_health() {
        lines.push(format!("Boss   {}", health));
    }
    lines
}

fn bar(icon: char, count: i32) -> String {
    std::iter::repeat(icon).take(count.max(0) as usize).collect()
}

/// Text of the screen shown once the game loop stops.
pub fn end_text(status: Status) -> &'static str {
    match status {
        Status::Finished => WIN_TEXT,
        _ => DEATH_TEXT,
    }
}

/// Enemy direction source for a run, seeded if requested.
pub fn direction_source(seed: Option<u64>) -> RandomDirections<SmallRng> {
    match seed {
        Some(seed) => RandomDirections(SmallRng::seed_from_u64(seed)),
        None => RandomDirections(SmallRng::from_rng(&mut rand::rng())),
    }
}

/// Sleeps out the rest of the frame that began at `start`.
pub fn pace_frame(start: Instant) {
    let elapsed = start.elapsed();
    if elapsed < LOOP_TIME {
        let time = LOOP_TIME.saturating_sub(elapsed);
        if time != Duration::ZERO {
            spin_sleep::sleep(time);
        }
    } else {
        warn!(behind = ?(elapsed - LOOP_TIME), "Game loop behind schedule");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelDefinition;
    use glam::IVec2;

    #[test]
    fn test_hud_lines() {
        let level = LevelDefinition::new(&["###", "#.#", "###"])
            .boss(1, 1, crate::entity::Direction::Up, 3)
            .build()
            .unwrap();
        let mut state = GameState::new(level, IVec2::ONE, 2);
        state.coins = 104;
        state.armor = -1;
        state.inventory.add(Item::Key);

        let lines = hud_lines(&state);
        assert_eq!(lines[1], "Coins  104");
        assert_eq!(lines[2], "Health ♥♥");
        assert_eq!(lines[3], "Armor  ");
        assert_eq!(lines[5], "Keys   ⚷");
        assert_eq!(lines.last().map(String::as_str), Some("Boss   3"));
    }

    #[test]
    fn test_end_text() {
        assert_eq!(end_text(Status::Finished), WIN_TEXT);
        assert_eq!(end_text(Status::GameOver), DEATH_TEXT);
    }

    #[test]
    fn test_seeded_sources_agree() {
        use crate::entity::movement::DirectionSource;
        let mut a = direction_source(Some(3));
        let mut b = direction_source(Some(3));
        for _ in 0..20 {
            assert_eq!(a.next_direction(), b.next_direction());
        }
    }
}
