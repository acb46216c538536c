//! Everything that lives on top of the grid: teleporters, fireballs, monsters and
//! floating combat text.

use glam::IVec2;
use strum_macros::IntoStaticStr;

use crate::audio::Sound;
use crate::map::Traversal;

pub mod direction;
pub mod movement;

pub use direction::{Direction, DIRECTIONS};

/// A fixed pad that moves the player from `entry` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teleporter {
    pub entry: IVec2,
    pub target: IVec2,
}

impl Teleporter {
    pub const fn new(x: i32, y: i32, target_x: i32, target_y: i32) -> Self {
        Self {
            entry: IVec2::new(x, y),
            target: IVec2::new(target_x, target_y),
        }
    }
}

/// Anything that hurts the player by standing on the same cell.
pub trait Hazard {
    fn position(&self) -> IVec2;
    /// Health lost by an unarmored player.
    fn damage(&self) -> i32;
    /// Armor lost by an armored player.
    fn armor_cost(&self) -> i32;
}

/// A fireball that bounces back and forth forever. It cannot be damaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub position: IVec2,
    pub direction: Direction,
    pub damage: i32,
}

impl Projectile {
    pub const fn new(x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            direction,
            damage,
        }
    }
}

impl Hazard for Projectile {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn damage(&self) -> i32 {
        self.damage
    }

    fn armor_cost(&self) -> i32 {
        1
    }
}

/// The three monster variants and their stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EnemyKind {
    Skeleton,
    Snake,
    Boss,
}

impl EnemyKind {
    /// Row of the tile behavior table this monster moves by.
    pub fn traversal(self) -> Traversal {
        match self {
            EnemyKind::Skeleton => Traversal::SKELETON,
            EnemyKind::Snake => Traversal::SNAKE,
            EnemyKind::Boss => Traversal::BOSS,
        }
    }

    pub fn starting_health(self) -> f32 {
        match self {
            EnemyKind::Skeleton => 3.0,
            EnemyKind::Snake => 5.0,
            EnemyKind::Boss => 3.0,
        }
    }

    /// Health removed by one sword swing.
    pub fn melee_damage(self) -> f32 {
        match self {
            EnemyKind::Skeleton | EnemyKind::Snake => 1.0,
            EnemyKind::Boss => 0.25,
        }
    }

    pub fn armor_cost(self) -> i32 {
        match self {
            EnemyKind::Skeleton | EnemyKind::Snake => 1,
            EnemyKind::Boss => 2,
        }
    }

    pub fn death_sound(self) -> Sound {
        match self {
            EnemyKind::Skeleton => Sound::SkeletonDeath,
            EnemyKind::Snake => Sound::SnakeDeath,
            EnemyKind::Boss => Sound::BossDeath,
        }
    }
}

/// A wandering monster.
///
/// Health is fractional because the boss only loses a quarter point per hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: IVec2,
    pub direction: Direction,
    pub damage: i32,
    pub health: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        Self {
            kind,
            position: IVec2::new(x, y),
            direction,
            damage,
            health: kind.starting_health(),
        }
    }

    pub fn skeleton(x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        Self::new(EnemyKind::Skeleton, x, y, direction, damage)
    }

    pub fn snake(x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        Self::new(EnemyKind::Snake, x, y, direction, damage)
    }

    pub fn boss(x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        Self::new(EnemyKind::Boss, x, y, direction, damage)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

impl Hazard for Enemy {
    fn position(&self) -> IVec2 {
        self.position
    }

    fn damage(&self) -> i32 {
        self.damage
    }

    fn armor_cost(&self) -> i32 {
        self.kind.armor_cost()
    }
}

/// Floating combat text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageIcon {
    pub position: IVec2,
    /// Frames left before the icon disappears.
    pub counter: u32,
    pub text: String,
}

impl DamageIcon {
    pub fn new(position: IVec2, counter: u32, text: impl Into<String>) -> Self {
        Self {
            position,
            counter,
            text: text.into(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.counter > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_defaults() {
        assert_eq!(Enemy::skeleton(1, 1, Direction::Up, 1).health, 3.0);
        assert_eq!(Enemy::snake(1, 1, Direction::Up, 2).health, 5.0);
        assert_eq!(Enemy::boss(1, 1, Direction::Up, 3).health, 3.0);
    }

    #[test]
    fn test_boss_needs_twelve_swings() {
        let mut boss = Enemy::boss(0, 0, Direction::Left, 3);
        let mut swings = 0;
        while boss.is_alive() {
            boss.health -= boss.kind.melee_damage();
            swings += 1;
        }
        assert_eq!(swings, 12);
    }

    #[test]
    fn test_hazard_costs() {
        let fireball = Projectile::new(0, 0, Direction::Down, 1);
        assert_eq!(fireball.armor_cost(), 1);
        assert_eq!(Enemy::boss(0, 0, Direction::Up, 3).armor_cost(), 2);
        assert_eq!(Enemy::snake(0, 0, Direction::Up, 2).damage(), 2);
    }
}
