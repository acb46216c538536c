//! Grid movement shared by the player, enemies and projectiles.

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::constants::GRID_MAX;
use crate::entity::direction::{Direction, DIRECTIONS};
use crate::error::MapError;
use crate::map::{Grid, Traversal};

/// Computes the cell one step from `pos` in `direction`.
///
/// The step is clamped to `0..=GRID_MAX` on both axes regardless of the size of
/// the level, so a mover at the clamp edge stays where it is.
pub fn next_position(pos: IVec2, direction: Direction) -> IVec2 {
    let next = pos + direction.as_ivec2();
    let in_range = |v: i32| (0..=GRID_MAX).contains(&v);
    if in_range(next.x) && in_range(next.y) {
        next
    } else {
        pos
    }
}

/// What happened to a mover during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// Hit a reflecting tile; the direction was reversed, the position kept.
    Reflected,
    /// Hit a tile it can neither enter nor bounce off.
    Blocked,
}

/// Advances a mover one cell in its current direction.
///
/// `mover` selects which row of the tile behavior table applies.
pub fn step(grid: &Grid, position: &mut IVec2, direction: &mut Direction, mover: Traversal) -> Result<StepOutcome, MapError> {
    let candidate = next_position(*position, *direction);
    let tile = grid.tile(candidate)?;

    if tile.is_passable_for(mover) {
        *position = candidate;
        Ok(StepOutcome::Moved)
    } else if tile.reflects_for(mover) {
        *direction = direction.opposite();
        Ok(StepOutcome::Reflected)
    } else {
        Ok(StepOutcome::Blocked)
    }
}

/// Source of the directions wandering enemies roll each throttled tick.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Uniformly random directions drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDirections<R>(pub R);

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_direction(&mut self) -> Direction {
        DIRECTIONS.choose(&mut self.0).copied().unwrap_or(Direction::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LevelParser, Tile};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_next_position_steps_one_cell() {
        let pos = IVec2::new(5, 5);
        assert_eq!(next_position(pos, Direction::Up), IVec2::new(5, 4));
        assert_eq!(next_position(pos, Direction::Down), IVec2::new(5, 6));
        assert_eq!(next_position(pos, Direction::Left), IVec2::new(4, 5));
        assert_eq!(next_position(pos, Direction::Right), IVec2::new(6, 5));
    }

    #[test]
    fn test_next_position_clamps_to_bound() {
        assert_eq!(next_position(IVec2::new(0, 0), Direction::Left), IVec2::new(0, 0));
        assert_eq!(next_position(IVec2::new(0, 0), Direction::Up), IVec2::new(0, 0));
        assert_eq!(next_position(IVec2::new(11, 3), Direction::Right), IVec2::new(11, 3));
        assert_eq!(next_position(IVec2::new(3, 11), Direction::Down), IVec2::new(3, 11));
    }

    #[test]
    fn test_next_position_never_leaves_range() {
        for x in 0..=GRID_MAX {
            for y in 0..=GRID_MAX {
                for dir in DIRECTIONS {
                    let next = next_position(IVec2::new(x, y), dir);
                    assert!((0..=GRID_MAX).contains(&next.x));
                    assert!((0..=GRID_MAX).contains(&next.y));
                }
            }
        }
    }

    #[test]
    fn test_step_outcomes() {
        let grid = LevelParser::parse_grid(&["#####", "#.D.#", "#####"]).unwrap();

        let mut pos = IVec2::new(1, 1);
        let mut dir = Direction::Up;
        assert_eq!(step(&grid, &mut pos, &mut dir, Traversal::SKELETON), Ok(StepOutcome::Reflected));
        assert_eq!((pos, dir), (IVec2::new(1, 1), Direction::Down));

        let mut dir = Direction::Right;
        assert_eq!(step(&grid, &mut pos, &mut dir, Traversal::SKELETON), Ok(StepOutcome::Blocked));
        assert_eq!((pos, dir), (IVec2::new(1, 1), Direction::Right));

        assert_eq!(step(&grid, &mut pos, &mut dir, Traversal::PROJECTILE), Ok(StepOutcome::Moved));
        assert_eq!(pos, IVec2::new(2, 1));
        assert_eq!(grid.get(pos), Some(Tile::ClosedDoor));
    }

    #[test]
    fn test_random_directions_cover_all_four() {
        let mut source = RandomDirections(SmallRng::seed_from_u64(7));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.next_direction());
        }
        assert_eq!(seen.len(), 4);
    }
}
