//! Player movement and everything a step can trigger.

use glam::IVec2;
use tracing::{debug, trace};

use crate::audio::Sound;
use crate::config::GameConfig;
use crate::constants::{PIGGY_COINS, TRAP_TEXT};
use crate::entity::movement::next_position;
use crate::entity::{DamageIcon, Direction};
use crate::error::GameResult;
use crate::game::state::{GameState, Item, Status};
use crate::level::LevelSet;
use crate::map::{Tile, Traversal};

/// Attempts to move the player one cell and applies the effect of the cell
/// that was stepped at.
///
/// Effects fire whether or not the player actually entered the cell, and are
/// chosen by the tile the cell held before the move.
pub fn move_player(state: &mut GameState, levels: &LevelSet, direction: Direction, config: &GameConfig) -> GameResult<()> {
    let candidate = next_position(state.position, direction);
    let tile = state.level.grid.tile(candidate)?;

    if tile.is_passable_for(Traversal::PLAYER) {
        state.position = candidate;
    }

    match tile {
        Tile::StairsDown => descend(state, levels)?,
        Tile::Coin => {
            consume(state, candidate)?;
            state.coins += 1;
            state.queue_sound(Sound::Coin);
            trace!(coins = state.coins, "Picked up coin");
        }
        Tile::Armor => {
            consume(state, candidate)?;
            state.armor += 1;
            trace!(armor = state.armor, "Picked up armor");
        }
        Tile::Sword => {
            consume(state, candidate)?;
            state.sword += 1;
            trace!(sword = state.sword, "Picked up sword");
        }
        Tile::Chest => {
            consume(state, candidate)?;
            state.inventory.add(Item::Key);
            trace!("Opened chest, found a key");
        }
        Tile::Trap => spring_trap(state, candidate, config.damage_icon_lifetime),
        Tile::Key => {
            consume(state, candidate)?;
            state.inventory.add(Item::Key);
            // Key cells are not walkable, but picking one up always moves the player there.
            state.position = candidate;
            trace!(keys = state.inventory.count(Item::Key), "Picked up key");
        }
        Tile::Potion => {
            consume(state, candidate)?;
            state.health += 1;
            trace!(health = state.health, "Drank potion");
        }
        Tile::Piggy => {
            consume(state, candidate)?;
            state.coins += PIGGY_COINS;
            trace!(coins = state.coins, "Smashed piggy bank");
        }
        Tile::ClosedDoor => {
            if state.inventory.take(Item::Key) {
                state.level.grid.set(candidate, Tile::OpenDoor)?;
                debug!(x = candidate.x, y = candidate.y, "Door opened");
            }
        }
        Tile::Wall | Tile::Floor | Tile::OpenDoor => {}
    }

    Ok(())
}

/// Walks the teleporters in definition order, moving the player each time it
/// stands on an entry pad. A target that is a later pad's entry chains on.
pub fn check_teleporters(state: &mut GameState) {
    for teleporter in &state.level.teleporters {
        if teleporter.entry == state.position {
            debug!(
                from = ?state.position,
                to = ?teleporter.target,
                "Teleported"
            );
            state.position = teleporter.target;
        }
    }
}

fn consume(state: &mut GameState, pos: IVec2) -> GameResult<()> {
    state.level.grid.set(pos, Tile::Floor)?;
    Ok(())
}

/// Traps cost a key if one is held, otherwise armor, otherwise health.
fn spring_trap(state: &mut GameState, pos: IVec2, lifetime: u32) {
    if state.inventory.take(Item::Key) {
        trace!("Trap ate a key");
    } else if state.armor > 0 {
        state.armor -= 1;
        trace!(armor = state.armor, "Trap dented armor");
    } else {
        state.health -= 1;
        trace!(health = state.health, "Trap hurt the player");
    }
    state.damage_icons.push(DamageIcon::new(pos, lifetime, TRAP_TEXT));
}

fn descend(state: &mut GameState, levels: &LevelSet) -> GameResult<()> {
    state.level_index += 1;
    if state.level_index < levels.len() {
        state.level = levels.instantiate(state.level_index)?;
        debug!(level = state.level_index, "Descended to next level");
    } else {
        state.status = Status::Finished;
        debug!("Took the stairs on the last level");
    }
    Ok(())
}
