//! Level definitions, the runtime level, and the ordered set the game plays through.

use glam::IVec2;
use tracing::debug;

use crate::entity::{Direction, Enemy, EnemyKind, Projectile, Teleporter};
use crate::error::{MapError, ParseError};
use crate::map::{Grid, LevelParser};

pub mod content;

/// The literal, load-time description of a level.
#[derive(Debug, Clone, Default)]
pub struct LevelDefinition {
    pub rows: Vec<String>,
    pub teleporters: Vec<Teleporter>,
    pub projectiles: Vec<Projectile>,
    pub skeletons: Vec<Enemy>,
    pub snakes: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
}

impl LevelDefinition {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().to_owned()).collect(),
            ..Default::default()
        }
    }

    pub fn teleporter(mut self, x: i32, y: i32, target_x: i32, target_y: i32) -> Self {
        self.teleporters.push(Teleporter::new(x, y, target_x, target_y));
        self
    }

    pub fn fireball(mut self, x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        self.projectiles.push(Projectile::new(x, y, direction, damage));
        self
    }

    pub fn skeleton(mut self, x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        self.skeletons.push(Enemy::skeleton(x, y, direction, damage));
        self
    }

    pub fn snake(mut self, x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        self.snakes.push(Enemy::snake(x, y, direction, damage));
        self
    }

    pub fn boss(mut self, x: i32, y: i32, direction: Direction, damage: i32) -> Self {
        self.bosses.push(Enemy::boss(x, y, direction, damage));
        self
    }

    /// Parses the rows and checks that every placement lies on the grid.
    pub fn build(&self) -> Result<Level, ParseError> {
        let grid = LevelParser::parse_grid(&self.rows)?;

        let check = |what: &'static str, pos: IVec2| {
            if grid.contains(pos) {
                Ok(())
            } else {
                Err(ParseError::PlacementOutOfBounds { what, x: pos.x, y: pos.y })
            }
        };

        for t in &self.teleporters {
            check("teleporter", t.entry)?;
            check("teleporter target", t.target)?;
        }
        for p in &self.projectiles {
            check("fireball", p.position)?;
        }
        for e in self.skeletons.iter().chain(&self.snakes).chain(&self.bosses) {
            check(e.kind.into(), e.position)?;
        }

        Ok(Level {
            grid,
            teleporters: self.teleporters.clone(),
            projectiles: self.projectiles.clone(),
            skeletons: self.skeletons.clone(),
            snakes: self.snakes.clone(),
            bosses: self.bosses.clone(),
        })
    }
}

/// A level being played: its grid and every entity list.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub grid: Grid,
    pub teleporters: Vec<Teleporter>,
    pub projectiles: Vec<Projectile>,
    pub skeletons: Vec<Enemy>,
    pub snakes: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
}

impl Level {
    /// The list holding monsters of `kind`.
    pub fn enemies_of_mut(&mut self, kind: EnemyKind) -> &mut Vec<Enemy> {
        match kind {
            EnemyKind::Skeleton => &mut self.skeletons,
            EnemyKind::Snake => &mut self.snakes,
            EnemyKind::Boss => &mut self.bosses,
        }
    }

    /// All monsters, skeletons first, then snakes, then bosses.
    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.skeletons.iter().chain(&self.snakes).chain(&self.bosses)
    }
}

/// The ordered list of levels a game plays through.
///
/// Every definition is parsed when the set is created, so a broken level is
/// reported at startup rather than when the player reaches it.
#[derive(Debug, Clone)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(definitions: &[LevelDefinition]) -> Result<Self, ParseError> {
        let levels = definitions.iter().map(LevelDefinition::build).collect::<Result<Vec<_>, _>>()?;
        if levels.is_empty() {
            return Err(ParseError::EmptyLevel);
        }
        debug!(count = levels.len(), "Level set loaded");
        Ok(Self { levels })
    }

    /// The four built-in levels, in play order.
    pub fn classic() -> Result<Self, ParseError> {
        Self::new(&content::classic_levels())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// A fresh copy of level `index`, with every entity at its initial placement.
    pub fn instantiate(&self, index: usize) -> Result<Level, MapError> {
        self.levels.get(index).cloned().ok_or(MapError::NoSuchLevel(index))
    }
}
