//! Throttled movement of fireballs and monsters.

use tracing::trace;

use crate::entity::movement::{step, DirectionSource, StepOutcome};
use crate::entity::EnemyKind;
use crate::error::MapError;
use crate::level::Level;
use crate::map::Traversal;

/// Moves every fireball one cell along its fixed direction, bouncing off walls
/// and stairs.
pub fn move_projectiles(level: &mut Level) -> Result<(), MapError> {
    let Level { grid, projectiles, .. } = level;
    for projectile in projectiles.iter_mut() {
        let outcome = step(grid, &mut projectile.position, &mut projectile.direction, Traversal::PROJECTILE)?;
        if outcome == StepOutcome::Reflected {
            trace!(position = ?projectile.position, "Fireball bounced");
        }
    }
    Ok(())
}

/// Gives every monster of `kind` a fresh random heading and tries to step.
///
/// The rolled heading is kept even when the step is blocked; only a wall
/// turns it around.
pub fn move_enemies(level: &mut Level, kind: EnemyKind, directions: &mut impl DirectionSource) -> Result<(), MapError> {
    let Level {
        grid,
        skeletons,
        snakes,
        bosses,
        ..
    } = level;
    let enemies = match kind {
        EnemyKind::Skeleton => skeletons,
        EnemyKind::Snake => snakes,
        EnemyKind::Boss => bosses,
    };

    for enemy in enemies.iter_mut() {
        enemy.direction = directions.next_direction();
        step(grid, &mut enemy.position, &mut enemy.direction, kind.traversal())?;
    }
    Ok(())
}
