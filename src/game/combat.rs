use tracing::{debug, trace};

use crate::audio::Sound;
use crate::entity::movement::next_position;
use crate::entity::{Enemy, EnemyKind, Hazard, DIRECTIONS};
use crate::game::state::GameState;

/// Swings the sword at the four orthogonal neighbors of the player.
///
/// Every enemy on a neighboring cell is hit once per direction that reaches it,
/// then the dead are removed from their lists.
pub fn melee(state: &mut GameState) {
    state.queue_sound(Sound::SwordSwing);

    for direction in DIRECTIONS {
        let target = next_position(state.position, direction);
        for kind in [EnemyKind::Skeleton, EnemyKind::Snake, EnemyKind::Boss] {
            for enemy in state.level.enemies_of_mut(kind).iter_mut().filter(|e| e.position == target) {
                enemy.health -= kind.melee_damage();
                trace!(kind = ?kind, health = enemy.health, "Enemy hit");
            }
        }
    }

    for kind in [EnemyKind::Skeleton, EnemyKind::Snake, EnemyKind::Boss] {
        let removed = remove_dead(state.level.enemies_of_mut(kind));
        for _ in 0..removed {
            state.queue_sound(kind.death_sound());
            debug!(kind = ?kind, "Enemy slain");
        }
    }
}

fn remove_dead(enemies: &mut Vec<Enemy>) -> usize {
    let before = enemies.len();
    enemies.retain(Enemy::is_alive);
    before - enemies.len()
}

/// Applies damage from every hazard sharing the player's cell.
///
/// Each contact is resolved on its own: armor absorbs the hit while any is
/// left, otherwise health pays the hazard's damage.
pub fn resolve_contacts(state: &mut GameState, clamp_armor: bool) {
    let position = state.position;
    let level = &state.level;
    let hits: Vec<(i32, i32)> = level
        .projectiles
        .iter()
        .map(|p| (p.position(), p.damage(), p.armor_cost()))
        .chain(level.enemies().map(|e| (e.position(), e.damage(), e.armor_cost())))
        .filter(|(pos, _, _)| *pos == position)
        .map(|(_, damage, cost)| (damage, cost))
        .collect();

    for (damage, armor_cost) in hits {
        if state.armor > 0 {
            state.armor -= armor_cost;
            if clamp_armor {
                state.armor = state.armor.max(0);
            }
            trace!(armor = state.armor, "Armor absorbed a hit");
        } else {
            state.health -= damage;
            debug!(health = state.health, damage, "Player hit");
        }
    }
}
